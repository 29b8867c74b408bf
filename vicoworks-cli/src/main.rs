//! vicoworks CLI - portfolio API server and counter tooling
//!
//! - `serve`: run the HTTP API (profile, statistics, gallery, counters)
//! - `migrate`: create the portfolio tables in a fresh database
//! - `home` / `stats` / `projects`: inspect what the site would render
//! - `visit` / `like`: bump the counters by hand
//! - `config`: show where configuration comes from

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vicoworks_core::PortfolioConfig;

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "vicoworks",
    author,
    version,
    about = "Portfolio API server with visitor and like counters"
)]
struct Cli {
    /// Enable debug logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    /// Config file (default: ~/.vicoworks/config.toml)
    #[arg(long, short = 'c', global = true, env = "VICOWORKS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the portfolio tables if they don't exist
    Migrate(commands::DatabaseArgs),
    /// Show the home profile
    Home(commands::inspect::ShowArgs),
    /// Show visitor and project counts
    Stats(commands::inspect::ShowArgs),
    /// List projects by likes, with optional search and category filter
    Projects(commands::inspect::ProjectsArgs),
    /// Count one visit
    Visit(commands::DatabaseArgs),
    /// Like a project
    Like(commands::counters::LikeArgs),
    /// Show configuration (path, effective values)
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = run(cli).await;
    tracing_setup::shutdown_otel();
    result
}

async fn run(cli: Cli) -> Result<()> {
    let config = PortfolioConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args, config).await,
        Commands::Migrate(args) => commands::run_migrate(args, config).await,
        Commands::Home(args) => commands::inspect::run_home(args, config).await,
        Commands::Stats(args) => commands::inspect::run_stats(args, config).await,
        Commands::Projects(args) => commands::inspect::run_projects(args, config).await,
        Commands::Visit(args) => commands::counters::run_visit(args, config).await,
        Commands::Like(args) => commands::counters::run_like(args, config).await,
        Commands::Config(args) => {
            commands::config::run_config(args, &config, cli.config.as_deref())
        }
    }
}
