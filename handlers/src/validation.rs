//! Rejects requests whose normalized payload is empty.

use async_trait::async_trait;
use chain_core::{forward_or_complete, Handler, Outcome, Request, Result, Successor};
use tracing::{info, instrument, warn};

pub const VALIDATION_STAGE: &str = "Validation";
pub const INVALID_DATA_REASON: &str = "Invalid data format";

/// Rejects empty or whitespace-only payloads; forwards everything else.
#[derive(Debug, Default)]
pub struct DataValidationHandler {
    next: Successor,
}

impl DataValidationHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Handler for DataValidationHandler {
    fn successor(&self) -> &Successor {
        &self.next
    }

    #[instrument(skip(self, request), fields(request_id = %request.id()))]
    async fn handle(&self, request: &Request) -> Result<Outcome> {
        if request.payload().is_empty() {
            warn!(origin = %request.origin(), "Invalid data format");
            return Ok(Outcome::rejected(INVALID_DATA_REASON));
        }
        info!("Data validation passed");
        forward_or_complete(&self.next, request, VALIDATION_STAGE).await
    }
}
