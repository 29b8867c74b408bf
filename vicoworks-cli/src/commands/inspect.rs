//! Read-only commands: home, stats, projects
//!
//! Use the same degrading queries as the server, so "unavailable" here
//! means the site would show its fallback state.

use anyhow::{bail, Result};
use clap::Parser;
use vicoworks_core::{category_facets, contact_links, PortfolioConfig, ProjectFilter};
use vicoworks_server::queries;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    /// Search project names (case-insensitive)
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Only projects in this category ("All" for every project)
    #[arg(long)]
    pub category: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_home(args: ShowArgs, config: PortfolioConfig) -> Result<()> {
    let store = args.db.connect(config).await?;
    let Some(profile) = queries::home_profile(&store).await else {
        bail!("home profile unavailable (missing row or store error, see log)");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!("{}", profile.overview.as_deref().unwrap_or("(no overview)"));
    println!();
    println!("Core:   {}", profile.core_tags().join(", "));
    println!("Skills: {}", profile.skills().join(", "));
    for link in contact_links(&profile) {
        println!("{:<9} {}", format!("{}:", link.label), link.href);
    }
    Ok(())
}

pub async fn run_stats(args: ShowArgs, config: PortfolioConfig) -> Result<()> {
    let store = args.db.connect(config).await?;
    let Some(stats) = queries::statistics(&store).await else {
        bail!("statistics unavailable (missing row or store error, see log)");
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Visitors: {}", stats.visitors());
        println!("Projects: {}", stats.projects());
    }
    Ok(())
}

pub async fn run_projects(args: ProjectsArgs, config: PortfolioConfig) -> Result<()> {
    let store = args.db.connect(config).await?;
    let projects = queries::projects(&store).await;
    let facets = category_facets(&projects);
    let filtered = ProjectFilter::new(args.query, args.category).apply(projects);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    if filtered.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    for project in &filtered {
        println!(
            "{:>5} ♥  {}  [{}]  {}",
            project.likes(),
            project.display_name(),
            project.categories().join(", "),
            project.status.as_deref().unwrap_or("")
        );
    }
    println!();
    println!("Categories: {}", facets.join(" | "));
    Ok(())
}
