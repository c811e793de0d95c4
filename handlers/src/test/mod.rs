//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests interact with handlers via public and pub(crate) APIs.

mod config_test;
mod ip_filtering_handler_test;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chain_core::{Handler, Outcome, Request, Result, Successor};

/// Terminal stand-in that counts how often it runs and returns a recognizable outcome.
pub(crate) struct ProbeHandler {
    calls: AtomicUsize,
    next: Successor,
}

impl ProbeHandler {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            next: Successor::new(),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for ProbeHandler {
    fn successor(&self) -> &Successor {
        &self.next
    }

    async fn handle(&self, request: &Request) -> Result<Outcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Outcome::complete(format!("Probe {}", request.id())))
    }
}
