//! # CoachRS Config Command
//!
//! File: cli/src/commands/config.rs
//! Author: Christi Mahu
//!
//! `coachrs config show` prints the effective configuration (defaults merged
//! with the user and project files, or an explicit `--config` file) as TOML.
//! The output is itself a valid config file, which makes it a convenient
//! starting point for customizing question pools and rule tables.
//!
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Defaults to `show`.
    #[command(subcommand)]
    command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show(ShowArgs),
}

#[derive(Parser, Debug, Default)]
struct ShowArgs {
    /// Read this configuration file instead of the user/project files.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Handler for `coachrs config`.
pub fn handle_config(args: ConfigArgs) -> Result<()> {
    let command = args
        .command
        .unwrap_or(ConfigCommand::Show(ShowArgs::default()));
    match command {
        ConfigCommand::Show(show) => {
            let cfg = config::load_config(show.config.as_deref())?;
            let rendered =
                toml::to_string_pretty(&cfg).context("Failed to render configuration as TOML")?;
            print!("{}", rendered);
        }
    }
    Ok(())
}
