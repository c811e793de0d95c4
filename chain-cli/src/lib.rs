//! # chain-cli
//!
//! CLI foundation: argument parsing, config loading, and running requests through the chain.

pub mod cli;

pub use cli::{demo_requests, load_config, load_requests, run_requests, Cli, Commands};
pub use handlers::ChainConfig;
