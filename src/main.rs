//! Qtum Ethereum RPC Gateway
//!
//! Entry point for the gateway that bridges Ethereum JSON-RPC to a Qtum
//! node. Loads configuration from environment/.env file and starts the
//! JSON-RPC server on the configured port.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qtum_eth_rpc::config::Config;
use qtum_eth_rpc::server::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    info!("=== Qtum Ethereum RPC Gateway ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Qtum RPC: {}", config.qtum_rpc_url);
    info!("  RPC Port: {}", config.gateway_port);
    info!("  Debug: {}", config.debug);

    start_server(config).await?;

    Ok(())
}
