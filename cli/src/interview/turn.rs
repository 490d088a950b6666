//! # CoachRS Turn Records
//!
//! File: cli/src/interview/turn.rs
//! Author: Christi Mahu
//!
//! One `TurnRecord` is created per exchange and never modified afterwards.
//! The session only hands out shared slices of its turn log, so records stay
//! immutable once appended. Field names match the persisted JSON transcript.
//!
use serde::{Deserialize, Serialize};

/// Diagnostic trace recorded for the opening turn.
pub const OPENING_THOUGHTS: &str = "[System]: start";

/// Immutable log entry for one exchange.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    /// Starts at 1 and increases by one per turn.
    pub turn_id: u32,
    /// The prompt shown to the candidate.
    pub agent_visible_message: String,
    /// The raw reply. Empty for the opening turn.
    pub user_message: String,
    /// Observer/interviewer trace. Never shown to the candidate as a prompt.
    pub internal_thoughts: String,
}

impl TurnRecord {
    pub fn new(
        turn_id: u32,
        agent_visible_message: impl Into<String>,
        user_message: impl Into<String>,
        internal_thoughts: impl Into<String>,
    ) -> Self {
        Self {
            turn_id,
            agent_visible_message: agent_visible_message.into(),
            user_message: user_message.into(),
            internal_thoughts: internal_thoughts.into(),
        }
    }

    /// The first turn of every session: the greeting, with no reply yet.
    pub fn opening(greeting: impl Into<String>) -> Self {
        Self::new(1, greeting, "", OPENING_THOUGHTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_turn_has_id_one_and_no_reply() {
        let turn = TurnRecord::opening("Hi, Alex!");
        assert_eq!(turn.turn_id, 1);
        assert_eq!(turn.agent_visible_message, "Hi, Alex!");
        assert!(turn.user_message.is_empty());
        assert_eq!(turn.internal_thoughts, OPENING_THOUGHTS);
    }

    #[test]
    fn serializes_with_transcript_field_names() {
        let turn = TurnRecord::new(2, "What is a Git commit?", "a snapshot", "[Observer]: Weak answer");
        let value = serde_json::to_value(&turn).unwrap();
        assert_eq!(value["turn_id"], 2);
        assert_eq!(value["agent_visible_message"], "What is a Git commit?");
        assert_eq!(value["user_message"], "a snapshot");
        assert_eq!(value["internal_thoughts"], "[Observer]: Weak answer");
    }
}
