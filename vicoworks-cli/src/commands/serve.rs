//! HTTP server command
//!
//! Runs the portfolio API against the configured Postgres store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use vicoworks_core::PortfolioConfig;
use vicoworks_server::http::{run_server, AppState, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config; default 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Redirect alias hosts (e.g. www.) to this host
    #[arg(long)]
    pub canonical_host: Option<String>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, mut config: PortfolioConfig) -> Result<()> {
    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if args.cors_permissive {
        config.server.cors_permissive = true;
    }
    if let Some(host) = args.canonical_host {
        config.server.canonical_host = Some(host);
    }

    let server_config = ServerConfig::from(&config.server);
    let base_url = config.base_url().to_string();

    tracing::info!("Starting vicoworks server on {}", server_config.bind_addr);

    let store = args.db.connect(config).await?;
    let state = AppState::new(Arc::new(store), base_url);

    // Blocks until shutdown
    run_server(state, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
