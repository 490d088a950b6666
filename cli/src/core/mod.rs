//! # CoachRS Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the CoachRS application:
//! - `config`: Configuration loading, merging, and validation (including the
//!   rule tables and question pools the interview engine runs on)
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CoachError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
