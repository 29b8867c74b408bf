//! Counter commands: visit, like

use anyhow::{Context, Result};
use clap::Parser;
use vicoworks_core::PortfolioConfig;
use vicoworks_server::{counters, Revalidator};

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct LikeArgs {
    /// Project id
    pub project_id: String,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_visit(args: DatabaseArgs, config: PortfolioConfig) -> Result<()> {
    let store = args.connect(config).await?;
    let count = counters::increment_visitor_count(&store, &Revalidator::new())
        .await
        .context("Visitor count not updated")?;
    println!("Visitors: {}", count);
    Ok(())
}

pub async fn run_like(args: LikeArgs, config: PortfolioConfig) -> Result<()> {
    let store = args.db.connect(config).await?;
    let count = counters::increment_project_like(&store, &Revalidator::new(), &args.project_id)
        .await
        .with_context(|| format!("Like for '{}' not recorded", args.project_id))?;
    println!("{}: {} likes", args.project_id, count);
    Ok(())
}
