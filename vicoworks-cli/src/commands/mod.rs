//! Command implementations for the vicoworks CLI

pub mod config;
pub mod counters;
pub mod inspect;
pub mod serve;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use vicoworks_core::PortfolioConfig;
use vicoworks_server::db::{self, create_pool_with_options};
use vicoworks_server::PgStore;

/// Database connection flags shared by store-backed commands
#[derive(Parser, Debug, Clone, Default)]
pub struct DatabaseArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

impl DatabaseArgs {
    /// Apply the flag to `config`, validate, and connect.
    pub async fn connect(&self, mut config: PortfolioConfig) -> Result<PgStore> {
        if let Some(url) = &self.database_url {
            config.database.url = Some(url.clone());
        }
        config.validate()?;
        let url = config.require_database_url()?;

        let pool = create_pool_with_options(
            url,
            config.database.max_connections,
            Duration::from_secs(config.database.acquire_timeout_secs),
        )
        .await
        .context("Failed to create database pool")?;

        Ok(PgStore::new(pool))
    }
}

/// Create the portfolio tables if missing
pub async fn run_migrate(args: DatabaseArgs, config: PortfolioConfig) -> Result<()> {
    let store = args.connect(config).await?;
    db::migrations::run(store.pool())
        .await
        .context("Schema bootstrap failed")?;
    println!("Portfolio tables are in place.");
    Ok(())
}
