//! Rejects requests coming from blocked origins.

use std::collections::HashSet;

use async_trait::async_trait;
use chain_core::{forward_or_complete, Handler, Outcome, Request, Result, Successor};
use tracing::{info, instrument, warn};

pub const IP_STAGE: &str = "IP Check";

/// Blocklist used by [`IpFilteringHandler::new`].
pub const DEFAULT_BLOCKED_IPS: [&str; 2] = ["192.168.0.10", "10.0.0.1"];

/// Rejects a request whose origin is in the blocklist. Origins are compared verbatim.
#[derive(Debug)]
pub struct IpFilteringHandler {
    blocked_ips: HashSet<String>,
    next: Successor,
}

impl IpFilteringHandler {
    /// Creates a handler with its own copy of [`DEFAULT_BLOCKED_IPS`].
    pub fn new() -> Self {
        Self::with_blocked(DEFAULT_BLOCKED_IPS)
    }

    /// Creates a handler blocking exactly the given origins. An empty list blocks nothing.
    pub fn with_blocked<I, S>(blocked_ips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked_ips: blocked_ips.into_iter().map(Into::into).collect(),
            next: Successor::new(),
        }
    }

    pub fn is_blocked(&self, origin: &str) -> bool {
        self.blocked_ips.contains(origin)
    }

    pub fn blocked_ips(&self) -> &HashSet<String> {
        &self.blocked_ips
    }
}

impl Default for IpFilteringHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Handler for IpFilteringHandler {
    fn successor(&self) -> &Successor {
        &self.next
    }

    #[instrument(skip(self, request), fields(request_id = %request.id()))]
    async fn handle(&self, request: &Request) -> Result<Outcome> {
        let origin = request.origin();
        if self.is_blocked(origin) {
            warn!(origin = %origin, "Blocked IP");
            return Ok(Outcome::rejected(format!("Blocked IP {}", origin)));
        }
        info!(origin = %origin, "IP check passed");
        forward_or_complete(&self.next, request, IP_STAGE).await
    }
}
