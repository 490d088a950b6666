//! # CoachRS Difficulty Adjuster
//!
//! File: cli/src/interview/difficulty.rs
//! Author: Christi Mahu
//!
//! Maps the cumulative score (after the current turn) and the current reply
//! flags to the tier the next question is drawn from. There is no hysteresis
//! beyond the score itself, so the tier may change on every turn.
//!
use crate::interview::observer::ReplyFlags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A good answer moves to hard once the score is strictly above this.
pub const HARD_SCORE_THRESHOLD: i64 = 2;
/// Scores strictly below this fall back to easy.
pub const EASY_SCORE_THRESHOLD: i64 = -1;

/// Question difficulty tier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

/// Picks the next tier. Checks run in order; the first that holds wins.
pub fn next_tier(cumulative_score: i64, flags: &ReplyFlags) -> Difficulty {
    if flags.is_good_answer && cumulative_score > HARD_SCORE_THRESHOLD {
        Difficulty::Hard
    } else if flags.is_hallucination || cumulative_score < EASY_SCORE_THRESHOLD {
        Difficulty::Easy
    } else {
        Difficulty::Medium
    }
}
