//! # CoachRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for running real hiring interviews.
//!
//! ## Overview
//!
//! This file serves as the main entry point for the CoachRS CLI, a scripted,
//! turn-based mock technical interviewer. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - `interview`: The turn-processing engine (observer, difficulty, question
//!   bank, skill tracking, feedback). No I/O beyond the transcript sink.
//! - `commands`: Drivers that read replies and print prompts
//! - `core`: Configuration and error types
//! - `common`: Shared filesystem helpers
//!
//! ## Examples
//!
//! ```bash
//! # Interactive interview
//! coachrs interview --name Alex --experience "Django pet projects"
//!
//! # Replay a script of replies with debug logging
//! coachrs -vv replay replies.txt --name Alex
//!
//! # Show the effective configuration
//! coachrs config show
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (interview, replay, config)
mod common; // Shared utilities (filesystem)
mod core; // Core infrastructure (errors, config)
mod interview; // Turn-processing engine

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "coachrs",
    about = "CoachRS: adaptive mock technical interviews in the terminal",
    long_about = "Runs a scripted, turn-based mock interview: classifies replies, adapts\n\
                  question difficulty, tracks skills, and writes a JSON transcript with feedback.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "i")]
    Interview(commands::interview::InterviewArgs),
    #[command(alias = "r")]
    Replay(commands::replay::ReplayArgs),
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Interview(args) => commands::interview::handle_interview(args),
        Commands::Replay(args) => commands::replay::handle_replay(args),
        Commands::Config(args) => commands::config::handle_config(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
