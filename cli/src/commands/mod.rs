//! # CoachRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the CoachRS CLI. Each
//! command defines its own clap arguments and a `handle_*` function that
//! `main.rs` routes to. The commands are thin drivers: all interview logic
//! lives in `crate::interview`.
//!
//! ## Commands
//!
//! - `interview`: Interactive interview over stdin/stdout
//! - `replay`: The same interview fed from a file of replies
//! - `config`: Inspect the effective configuration
//!

/// Print the effective configuration.
pub mod config;
/// Interactive interview driver, plus the reply loop shared with `replay`.
pub mod interview;
/// Scripted interview driver.
pub mod replay;
