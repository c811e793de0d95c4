//! Last stage: produces the processed result.

use async_trait::async_trait;
use chain_core::{Handler, Outcome, Request, Result, Successor};
use tracing::{info, instrument};

/// Always returns [`Outcome::Processed`] with the request id and normalized payload.
///
/// Terminal by design: it never looks at its successor, so anything wired after it is unreachable.
#[derive(Debug, Default)]
pub struct FinalProcessingHandler {
    next: Successor,
}

impl FinalProcessingHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Handler for FinalProcessingHandler {
    fn successor(&self) -> &Successor {
        &self.next
    }

    fn is_terminal(&self) -> bool {
        true
    }

    #[instrument(skip(self, request), fields(request_id = %request.id()))]
    async fn handle(&self, request: &Request) -> Result<Outcome> {
        info!("Processing request {}", request.id());
        Ok(Outcome::Processed {
            id: request.id().to_string(),
            payload: request.payload().to_string(),
        })
    }
}
