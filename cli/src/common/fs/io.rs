//! # CoachRS Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` that attach context to I/O errors. CoachRS
//! touches the filesystem in exactly two places, and both go through here:
//! - **`read_file_to_string`**: loads reply scripts for `coachrs replay`,
//!   replacing bytes that are not UTF-8.
//! - **`write_string_to_file`**: writes the JSON interview transcript, creating
//!   the parent directory first via **`ensure_dir_exists`**.
//!
//! Write failures are never retried or swallowed; they propagate to the caller
//! so that an unwritable transcript path ends the run with an error.
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let script = io::read_file_to_string(Path::new("replies.txt"))?;
//! io::write_string_to_file(Path::new("logs/interview_log.json"), "{}")?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{CoachError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating parents as needed.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(CoachError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing the read.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read file {:?}", path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes string content to `path`, overwriting any existing file.
///
/// The parent directory is created first when missing. A bare file name such
/// as `interview_log.json` has an empty parent, which is the current directory.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
