//! # CoachRS Transcript Persistence
//!
//! File: cli/src/interview/transcript.rs
//! Author: Christi Mahu
//!
//! The session hands the finished `InterviewLog` to a `TranscriptSink`. The
//! stock sink writes pretty-printed JSON to a file. Non-ASCII text is written
//! verbatim. Failures are returned to the caller unchanged and never retried.
//!
use crate::common::fs::io;
use crate::core::error::{CoachError, Result};
use crate::interview::feedback::InterviewLog;
use std::path::{Path, PathBuf};
use tracing::info;

/// Destination for a finished interview transcript.
pub trait TranscriptSink {
    fn persist(&self, log: &InterviewLog) -> Result<()>;
}

/// Writes the transcript as JSON to a file path.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Pretty-printed JSON for a transcript.
pub fn to_json(log: &InterviewLog) -> Result<String> {
    serde_json::to_string_pretty(log).map_err(|source| CoachError::Transcript { source }.into())
}

impl TranscriptSink for JsonFileSink {
    fn persist(&self, log: &InterviewLog) -> Result<()> {
        let json = to_json(log)?;
        io::write_string_to_file(&self.path, &json)?;
        info!("Interview transcript written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::interview::session::{Candidate, InterviewSession};
    use tempfile::tempdir;

    fn finished_log() -> InterviewLog {
        let candidate = Candidate {
            name: "Алекс".into(),
            position: "Backend Developer".into(),
            grade: "Junior".into(),
            experience: "Django pet projects".into(),
        };
        let (mut session, _) = InterviewSession::initialize(&Config::default(), candidate);
        session.process_turn("I have two years of experience with Django and REST APIs");
        session.generate_feedback(&Discard).unwrap()
    }

    struct Discard;

    impl TranscriptSink for Discard {
        fn persist(&self, _log: &InterviewLog) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_pretty_json_with_unicode_intact() -> Result<()> {
        let dir = tempdir()?;
        let sink = JsonFileSink::new(dir.path().join("nested/interview_log.json"));
        sink.persist(&finished_log())?;

        let written = std::fs::read_to_string(sink.path())?;
        assert!(written.contains("\"participant_name\": \"Алекс\""));
        assert!(written.contains("\n  \"turns\": ["));
        Ok(())
    }

    #[test]
    fn unwritable_path_surfaces_error() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "")?;
        let sink = JsonFileSink::new(blocker.join("interview_log.json"));
        assert!(sink.persist(&finished_log()).is_err());
        Ok(())
    }
}
