//! # CoachRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared, cross-cutting utilities used by the command handlers and the
//! transcript sink. Currently this is only filesystem I/O.
//!

/// Utilities for filesystem operations (reading scripts, writing transcripts).
pub mod fs;
