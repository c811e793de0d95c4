//! reqchain CLI: run the demo requests, a JSON file of requests, or a single request through the chain.
//! Config from env (.env supported) and optional CLI args.

use anyhow::{Context, Result};
use chain_cli::{demo_requests, load_config, load_requests, run_requests, Cli, Commands};
use chain_core::{init_tracing, Request};
use clap::Parser;
use handlers::chain_from_config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli);

    init_tracing(config.log_file.as_deref())?;
    info!(?config, "step: config loaded");

    let chain = chain_from_config(&config).context("Build handler chain from config")?;

    let requests = match cli.command {
        Commands::Demo => demo_requests(),
        Commands::Run { requests } => load_requests(&requests)?,
        Commands::Handle {
            id,
            payload,
            origin,
        } => vec![match payload {
            Some(payload) => Request::new(id, payload, origin),
            None => Request::without_payload(id, origin),
        }],
    };

    let rejected = run_requests(&chain, &requests, &mut std::io::stdout()).await?;
    info!(
        total = requests.len(),
        rejected = rejected,
        "step: all requests handled"
    );
    Ok(())
}
