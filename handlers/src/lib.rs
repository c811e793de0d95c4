//! # Handlers for the request chain
//!
//! This crate provides the handler policies (data validation, IP filtering, caching, final
//! processing), chain configuration loaded from the environment, and the default wiring.

mod caching;
mod config;
mod final_processing;
mod ip_filter;
mod validation;
mod wiring;

#[cfg(test)]
mod test;

pub use caching::{CachingHandler, CACHE_STAGE, DEFAULT_CACHE_ENTRY};
pub use config::{parse_blocked_ips, ChainConfig};
pub use final_processing::FinalProcessingHandler;
pub use ip_filter::{IpFilteringHandler, DEFAULT_BLOCKED_IPS, IP_STAGE};
pub use validation::{DataValidationHandler, INVALID_DATA_REASON, VALIDATION_STAGE};
pub use wiring::{chain_from_config, default_chain};
