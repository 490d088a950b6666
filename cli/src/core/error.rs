//! # CoachRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout CoachRS.
//!
//! The turn pipeline itself never fails: empty, whitespace-only, or otherwise
//! malformed replies are simply classified as weak answers. Errors only arise
//! at the edges of the application:
//! - Loading or validating configuration
//! - Reading reply scripts for `coachrs replay`
//! - Writing the interview transcript to disk
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CoachError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.questions.fallback.trim().is_empty() {
//!     return Err(CoachError::Config("fallback prompt is empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let json = serde_json::to_string_pretty(&log)
//!     .map_err(|source| CoachError::Transcript { source })?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CoachRS application.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Failed to encode interview transcript: {source}")]
    Transcript {
        #[from]
        source: serde_json::Error,
    },

    #[error("Reply script '{path}' is empty.")]
    EmptyScript { path: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = CoachError::Config("stop_keywords must not be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: stop_keywords must not be empty"
        );

        let empty_script = CoachError::EmptyScript {
            path: "replies.txt".into(),
        };
        assert_eq!(empty_script.to_string(), "Reply script 'replies.txt' is empty.");
    }

    #[test]
    fn test_transcript_error_wraps_serde_json() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CoachError = source.into();
        assert!(err
            .to_string()
            .starts_with("Failed to encode interview transcript:"));
    }
}
