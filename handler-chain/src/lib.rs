//! # Handler chain
//!
//! Wires handlers into a singly-linked dispatch list and runs requests through its head. Each handler
//! decides whether to end the chain or forward; the chain itself only logs around the head call.

use chain_core::{ChainError, Handler, Outcome, Request, Result};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Collects handlers in order and links them with [`Handler::set_next`] on build.
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Arc<dyn Handler>>,
}

impl ChainBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler after the ones already added.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Links handler i to handler i+1 and returns the chain headed by the first one.
    /// The last handler's existing successor link (if any) is left untouched.
    pub fn build(self) -> Result<Chain> {
        let head = self.handlers.first().cloned().ok_or(ChainError::EmptyChain)?;

        for pair in self.handlers.windows(2) {
            let (current, next) = (&pair[0], &pair[1]);
            if current.is_terminal() {
                warn!(
                    handler = %current.name(),
                    unreachable = %next.name(),
                    "step: wiring successor after a terminal handler, successor will never run"
                );
            }
            current.set_next(next.clone())?;
        }

        Ok(Chain::from_head(head))
    }
}

/// A wired chain. Cheap to clone; clones share the same handlers.
#[derive(Clone)]
pub struct Chain {
    head: Arc<dyn Handler>,
}

impl Chain {
    /// Wraps an already-wired head handler (e.g. one linked by hand with `set_next`).
    pub fn from_head(head: Arc<dyn Handler>) -> Self {
        Self { head }
    }

    /// Number of handlers reachable from the head by following successor links.
    /// Walks the current links, so rewiring through [`head`](Self::head) is reflected.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        let mut len = 1;
        let mut cursor = self.head.successor().get();
        while let Some(node) = cursor {
            len += 1;
            cursor = node.successor().get();
        }
        len
    }

    pub fn head(&self) -> &Arc<dyn Handler> {
        &self.head
    }

    /// Runs the request through the head handler and returns the terminal outcome.
    #[instrument(skip(self, request), fields(request_id = %request.id()))]
    pub async fn handle(&self, request: &Request) -> Result<Outcome> {
        info!(
            origin = %request.origin(),
            head = %self.head.name(),
            "step: handler_chain started"
        );

        let outcome = self.head.handle(request).await?;

        info!(
            outcome_kind = %outcome.kind(),
            outcome = %outcome,
            "step: handler_chain finished"
        );

        Ok(outcome)
    }
}

// Integration tests live in tests/handler_chain_test.rs
