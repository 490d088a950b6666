//! # CoachRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! built here runs inside a scratch directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed into it, so a developer's own
//! `~/.config/coachrs/config.toml` or a stray `.coachrs.toml` can never leak
//! into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the compiled `coachrs` binary.
///
/// ## Panics
/// Panics if the `coachrs` binary cannot be found via `Command::cargo_bin`.
pub fn coachrs_cmd() -> Command {
    Command::cargo_bin("coachrs").expect("Failed to find coachrs binary for testing")
}

/// A `coachrs` command running in `dir` with user config lookups confined to it.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = coachrs_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("RUST_LOG")
        .env_remove("COACHRS_NAME");
    cmd
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test fixture");
    path
}

/// Parses a transcript written by the binary.
pub fn read_transcript(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path).expect("Transcript was not written");
    serde_json::from_str(&text).expect("Transcript is not valid JSON")
}
