//! # CoachRS Interview Command
//!
//! File: cli/src/commands/interview.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for running real hiring interviews.
//!
//! ## Overview
//!
//! This module implements `coachrs interview`, the interactive front end for
//! an `InterviewSession`. It also hosts the reply loop shared with
//! `coachrs replay`:
//! - Reads one reply per line from any `BufRead` source
//! - Ends the interview when a reply contains a stop keyword
//!   (case-insensitive substring), or at end of input
//! - Prints each internal trace and the next prompt
//! - Finalizes by persisting the transcript and printing the feedback JSON
//!
//! ## Examples
//!
//! ```bash
//! # Interactive interview, transcript written to ./interview_log.json
//! coachrs interview --name Alex --position "Backend Developer" --grade Junior \
//!     --experience "Django pet projects"
//!
//! # Write the transcript somewhere else
//! coachrs interview --name Alex --output ~/interviews/alex.json
//! ```
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::interview::matching::KeywordSet;
use crate::interview::session::{Candidate, InterviewSession};
use crate::interview::transcript::JsonFileSink;
use anyhow::Context;
use clap::{Args, Parser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Identity of the candidate, shared by `interview` and `replay`.
#[derive(Args, Debug, Clone)]
pub struct CandidateArgs {
    /// Candidate name, used in the greeting and the transcript.
    #[arg(long, env = "COACHRS_NAME")]
    pub name: String,
    /// Position being interviewed for.
    #[arg(long, default_value = "Backend Developer")]
    pub position: String,
    /// Declared seniority grade.
    #[arg(long, default_value = "Junior")]
    pub grade: String,
    /// Declared experience the opening question asks about.
    #[arg(long, default_value = "Python")]
    pub experience: String,
}

impl From<CandidateArgs> for Candidate {
    fn from(args: CandidateArgs) -> Self {
        Candidate {
            name: args.name,
            position: args.position,
            grade: args.grade,
            experience: args.experience,
        }
    }
}

/// Options controlling configuration and output, shared by `interview` and `replay`.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionOptions {
    /// Where to write the JSON transcript (overrides `session.transcript_path`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Use this configuration file instead of the user/project files.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SessionOptions {
    pub fn load_config(&self) -> Result<Config> {
        config::load_config(self.config.as_deref())
    }

    pub fn transcript_path(&self, config: &Config) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.session.transcript_path))
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "interview",
    about = "Run an interactive mock interview",
    long_about = "Asks adaptive questions, reading one reply per line from stdin.\n\
                  Type a stop keyword (default: 'stop' or 'feedback') to finish and get feedback."
)]
pub struct InterviewArgs {
    #[command(flatten)]
    pub candidate: CandidateArgs,
    #[command(flatten)]
    pub options: SessionOptions,
}

/// How replies reach the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// A person is typing: show a `You:` prompt before each read.
    Interactive,
    /// Replies come from a file: echo each one so the output reads as a dialogue.
    Scripted,
}

/// Why the reply loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    StopKeyword,
    EndOfInput,
}

/// Feeds replies from `input` into `session` until a stop keyword or EOF.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut InterviewSession,
    mut input: R,
    out: &mut W,
    stop_keywords: &KeywordSet,
    mode: InputMode,
) -> Result<Ending> {
    loop {
        if mode == InputMode::Interactive {
            write!(out, "\nYou: ")?;
            out.flush()?;
        }

        // Bytes that are not UTF-8 become U+FFFD; such replies are still turns.
        let mut buf = Vec::new();
        if input
            .read_until(b'\n', &mut buf)
            .context("Failed to read candidate reply")?
            == 0
        {
            debug!("Reached end of input.");
            return Ok(Ending::EndOfInput);
        }
        let line = String::from_utf8_lossy(&buf);
        let reply = line.trim_end_matches(['\n', '\r']);

        if mode == InputMode::Scripted {
            writeln!(out, "\nYou: {}", reply)?;
        }
        if let Some(keyword) = stop_keywords.find_in(reply) {
            info!("Stop keyword '{}' received, finishing interview.", keyword);
            return Ok(Ending::StopKeyword);
        }

        let prompt = session.process_turn(reply);
        if let Some(turn) = session.turns().last() {
            writeln!(out, "\n📝 {}", turn.internal_thoughts)?;
        }
        writeln!(out, "🤖 Interviewer: {}", prompt)?;
    }
}

/// Persists the transcript to `path` and prints the feedback section.
pub fn finalize<W: Write>(session: &InterviewSession, path: &Path, out: &mut W) -> Result<()> {
    if session.state().asked_questions.is_empty() {
        info!("Interview ended before any bank question was asked.");
    }
    let sink = JsonFileSink::new(path);
    let log = session
        .generate_feedback(&sink)
        .with_context(|| format!("Failed to save interview transcript to {}", path.display()))?;

    writeln!(out, "\nFeedback ready:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&log.final_feedback)?)?;
    writeln!(out, "✅ Transcript written to {}", sink.path().display())?;
    Ok(())
}

/// Prints the banner and opening prompt for a fresh session.
pub fn open_session<W: Write>(
    config: &Config,
    candidate: Candidate,
    out: &mut W,
) -> Result<InterviewSession> {
    let (session, opening) = InterviewSession::initialize(config, candidate);
    writeln!(out, "CoachRS mock interview")?;
    writeln!(
        out,
        "Type any of [{}] to finish and receive feedback.",
        config.session.stop_keywords.join(", ")
    )?;
    writeln!(out, "🤖 Interviewer: {}", opening)?;
    Ok(session)
}

/// Handler for `coachrs interview`.
pub fn handle_interview(args: InterviewArgs) -> Result<()> {
    info!("Handling interview command...");
    let config = args.options.load_config()?;
    let transcript_path = args.options.transcript_path(&config);
    let stop_keywords = KeywordSet::new(&config.session.stop_keywords);

    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    let mut session = open_session(&config, args.candidate.into(), &mut out)?;
    let ending = run_session(
        &mut session,
        stdin.lock(),
        &mut out,
        &stop_keywords,
        InputMode::Interactive,
    )?;
    debug!("Interview ended: {:?}", ending);
    finalize(&session, &transcript_path, &mut out)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn candidate() -> Candidate {
        Candidate {
            name: "Alex".into(),
            ..Candidate::default()
        }
    }

    fn stop() -> KeywordSet {
        KeywordSet::new(["stop", "feedback"])
    }

    #[test]
    fn stops_at_keyword_without_processing_it() {
        let config = Config::default();
        let mut out = Vec::new();
        let mut session = open_session(&config, candidate(), &mut out).unwrap();

        let input = Cursor::new("I have two years of experience with Django and REST APIs\nOK, STOP now\nnever read\n");
        let ending =
            run_session(&mut session, input, &mut out, &stop(), InputMode::Scripted).unwrap();

        assert_eq!(ending, Ending::StopKeyword);
        assert_eq!(session.turns().len(), 2);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("🤖 Interviewer: How does a SQL JOIN work?"));
        assert!(printed.contains("📝 [Observer]: Good answer"));
        assert!(!printed.contains("never read"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let config = Config::default();
        let mut out = Vec::new();
        let mut session = open_session(&config, candidate(), &mut out).unwrap();

        let ending = run_session(
            &mut session,
            Cursor::new("first\r\n\nthird"),
            &mut out,
            &stop(),
            InputMode::Interactive,
        )
        .unwrap();

        assert_eq!(ending, Ending::EndOfInput);
        // Blank lines are replies too.
        let replies: Vec<&str> = session
            .turns()
            .iter()
            .skip(1)
            .map(|t| t.user_message.as_str())
            .collect();
        assert_eq!(replies, vec!["first", "", "third"]);
        assert!(String::from_utf8(out).unwrap().contains("You: "));
    }

    #[test]
    fn invalid_utf8_reply_is_a_weak_turn_not_an_error() {
        let config = Config::default();
        let mut out = Vec::new();
        let mut session = open_session(&config, candidate(), &mut out).unwrap();

        let input = Cursor::new(
            b"I have two years of experience with Django and REST APIs\ncaf\xe9 latin-1 reply\nstop\n"
                .to_vec(),
        );
        let ending =
            run_session(&mut session, input, &mut out, &stop(), InputMode::Scripted).unwrap();

        assert_eq!(ending, Ending::StopKeyword);
        assert_eq!(session.turns().len(), 3);
        let turn = &session.turns()[2];
        assert_eq!(turn.user_message, "caf\u{FFFD} latin-1 reply");
        assert!(turn.internal_thoughts.starts_with("[Observer]: Weak answer"));
    }

    #[test]
    fn finalize_writes_transcript_and_prints_feedback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/log.json");
        let config = Config::default();
        let mut out = Vec::new();
        let session = open_session(&config, candidate(), &mut out).unwrap();

        finalize(&session, &path, &mut out).unwrap();

        assert!(path.is_file());
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("\"hiring_recommendation\": \"Hire\""));
        assert!(printed.contains("Transcript written to"));
    }

    #[test]
    fn output_flag_overrides_configured_path() {
        let config = Config::default();
        let options = SessionOptions {
            output: Some(PathBuf::from("custom.json")),
            config: None,
        };
        assert_eq!(options.transcript_path(&config), PathBuf::from("custom.json"));
        assert_eq!(
            SessionOptions::default().transcript_path(&config),
            PathBuf::from("interview_log.json")
        );
    }
}
