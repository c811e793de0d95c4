//! CLI parser, config loading, and request runner.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chain_core::Request;
use clap::{Parser, Subcommand};
use handler_chain::Chain;
use handlers::ChainConfig;

#[derive(Parser, Debug)]
#[command(name = "reqchain")]
#[command(about = "Request chain CLI: validation, IP filter, cache, final processing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Origin to block (repeatable). Overrides BLOCKED_IPS.
    #[arg(long = "blocked-ip", global = true)]
    pub blocked_ips: Vec<String>,

    /// JSON object file of request id -> cached response. Overrides CACHE_FILE.
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,

    /// Also write logs to this file. Overrides LOG_FILE.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the built-in sample requests.
    Demo,
    /// Run every request in a JSON array file ({"id", "payload"?, "origin"}).
    Run {
        #[arg(short, long)]
        requests: PathBuf,
    },
    /// Run a single request.
    Handle {
        #[arg(long)]
        id: String,
        /// Omit to send a request without payload.
        #[arg(long)]
        payload: Option<String>,
        #[arg(long)]
        origin: String,
    },
}

/// Loads [`ChainConfig`] from environment, then applies CLI overrides.
pub fn load_config(cli: &Cli) -> ChainConfig {
    let mut config = ChainConfig::from_env();
    apply_overrides(&mut config, cli);
    config
}

fn apply_overrides(config: &mut ChainConfig, cli: &Cli) {
    if !cli.blocked_ips.is_empty() {
        config.blocked_ips = Some(cli.blocked_ips.clone());
    }
    if let Some(cache_file) = &cli.cache_file {
        config.cache_file = Some(cache_file.clone());
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = Some(log_file.clone());
    }
}

/// The sample requests run by `reqchain demo`.
pub fn demo_requests() -> Vec<Request> {
    vec![
        Request::new("200", "Order: 5 units", "192.168.1.5"),
        Request::new("201", "Order: 10 units", "192.168.0.10"),
        Request::new("123", "Cached content", "192.168.1.8"),
        Request::new("999", "   ", "1.2.3.4"),
    ]
}

/// Reads a JSON array of requests.
pub fn load_requests(path: &Path) -> Result<Vec<Request>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read requests file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Parse requests file {} as a JSON array", path.display()))
}

/// Runs each request through the chain and writes "Processing {id}:" followed by the outcome.
/// Returns how many requests were rejected.
pub async fn run_requests<W: Write>(
    chain: &Chain,
    requests: &[Request],
    out: &mut W,
) -> Result<usize> {
    let mut rejected = 0;
    for request in requests {
        let outcome = chain
            .handle(request)
            .await
            .with_context(|| format!("Handle request {}", request.id()))?;
        writeln!(out, "\nProcessing {}:", request.id())?;
        writeln!(out, "{}", outcome)?;
        if outcome.is_rejected() {
            rejected += 1;
        }
    }
    Ok(rejected)
}
