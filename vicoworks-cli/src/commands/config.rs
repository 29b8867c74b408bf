//! Config command: where configuration lives and what it resolves to

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use vicoworks_core::PortfolioConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,
    /// Print the effective configuration (file + environment), password redacted
    Show,
}

pub fn run_config(
    args: ConfigArgs,
    config: &PortfolioConfig,
    explicit_path: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Path => {
            let path = explicit_path
                .map(Path::to_path_buf)
                .unwrap_or_else(PortfolioConfig::default_path);
            let note = if path.exists() { "" } else { " (not found, using defaults)" };
            println!("{}{}", path.display(), note);
        }
        ConfigCommand::Show => {
            let mut shown = config.clone();
            shown.database.url = config.database.redacted_url();
            let rendered =
                toml::to_string_pretty(&shown).context("Failed to render configuration")?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
