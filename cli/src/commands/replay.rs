//! # CoachRS Replay Command
//!
//! File: cli/src/commands/replay.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `coachrs replay <SCRIPT>` runs a whole interview non-interactively, reading
//! the candidate's replies from a text file (one reply per line). It shares
//! the reply loop with `coachrs interview`, so a script behaves exactly like
//! the same lines typed at the prompt:
//! - Blank lines are submitted as (weak) replies
//! - A line containing a stop keyword ends the interview early
//! - Otherwise the interview ends after the last line
//!
//! Either way, the transcript is written and the feedback is printed.
//!
//! ```bash
//! coachrs replay replies.txt --name Alex --output /tmp/alex.json
//! ```
//!
use crate::commands::interview::{self, CandidateArgs, InputMode, SessionOptions};
use crate::common::fs::io as fsio;
use crate::core::error::{CoachError, Result};
use crate::interview::matching::KeywordSet;
use anyhow::anyhow;
use clap::Parser;
use std::io::{self, Cursor};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "replay",
    about = "Run a mock interview from a file of replies",
    long_about = "Feeds each line of SCRIPT to the interviewer as a candidate reply,\n\
                  then writes the transcript and prints the feedback."
)]
pub struct ReplayArgs {
    /// Text file with one candidate reply per line.
    pub script: PathBuf,
    #[command(flatten)]
    pub candidate: CandidateArgs,
    #[command(flatten)]
    pub options: SessionOptions,
}

/// Handler for `coachrs replay`.
pub fn handle_replay(args: ReplayArgs) -> Result<()> {
    info!("Replaying replies from {}", args.script.display());
    let script = fsio::read_file_to_string(&args.script)?;
    if script.is_empty() {
        return Err(anyhow!(CoachError::EmptyScript {
            path: args.script.display().to_string(),
        }));
    }

    let config = args.options.load_config()?;
    let transcript_path = args.options.transcript_path(&config);
    let stop_keywords = KeywordSet::new(&config.session.stop_keywords);
    let mut out = io::stdout().lock();

    let mut session = interview::open_session(&config, args.candidate.into(), &mut out)?;
    let ending = interview::run_session(
        &mut session,
        Cursor::new(script),
        &mut out,
        &stop_keywords,
        InputMode::Scripted,
    )?;
    debug!("Replay ended: {:?}", ending);
    interview::finalize(&session, &transcript_path, &mut out)
}
