//! Default chain order: validation -> IP filter -> cache -> final processing.

use std::sync::Arc;

use chain_core::Result;
use handler_chain::{Chain, ChainBuilder};

use crate::{
    CachingHandler, ChainConfig, DataValidationHandler, FinalProcessingHandler,
    IpFilteringHandler,
};

/// Builds the default order with default blocklist and cache.
pub fn default_chain() -> Result<Chain> {
    chain_from_config(&ChainConfig::default())
}

/// Builds the default order using the configured blocklist and cache file.
pub fn chain_from_config(config: &ChainConfig) -> Result<Chain> {
    let ip_filter = match &config.blocked_ips {
        Some(blocked) => IpFilteringHandler::with_blocked(blocked.iter().cloned()),
        None => IpFilteringHandler::new(),
    };
    let cache = match config.load_cache_entries()? {
        Some(entries) => CachingHandler::with_entries(entries),
        None => CachingHandler::new(),
    };

    ChainBuilder::new()
        .add_handler(Arc::new(DataValidationHandler::new()))
        .add_handler(Arc::new(ip_filter))
        .add_handler(Arc::new(cache))
        .add_handler(Arc::new(FinalProcessingHandler::new()))
        .build()
}
