//! # CoachRS Observer
//!
//! File: cli/src/interview/observer.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The observer reads each candidate reply and decides what kind of answer it
//! was. It produces a `Reflection`: a category label, the score delta for the
//! turn, the suggested next interviewer action, and the raw flags.
//!
//! ## Architecture
//!
//! Classification is split in two:
//! - `ReplyClassifier` is the pluggable capability `classify(text) -> flags`.
//!   `KeywordClassifier` is the stock implementation driven by the
//!   `[observer]` config tables, but nothing downstream assumes keywords.
//! - `ObserverAnalyzer` turns flags into a `Reflection` and applies the score
//!   delta to the session.
//!
//! The flags are computed independently. A reply may be both a hallucination
//! and off-topic at once; only the category label picks a single winner, with
//! the priority hallucination > off-topic > good answer > weak answer.
//!
use crate::core::config::ObserverConfig;
use crate::interview::matching::KeywordSet;
use crate::interview::session::SessionState;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Raw classification result for one reply.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplyFlags {
    pub is_hallucination: bool,
    pub is_offtopic: bool,
    pub is_good_answer: bool,
}

/// Anything that can flag a candidate reply.
pub trait ReplyClassifier {
    fn classify(&self, reply: &str) -> ReplyFlags;
}

/// Substring matcher over the `[observer]` rule tables.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    hallucination_phrases: KeywordSet,
    offtopic_markers: KeywordSet,
    min_answer_length: usize,
}

impl KeywordClassifier {
    pub fn from_config(config: &ObserverConfig) -> Self {
        Self {
            hallucination_phrases: KeywordSet::new(&config.hallucination_phrases),
            offtopic_markers: KeywordSet::new(&config.offtopic_markers),
            min_answer_length: config.min_answer_length,
        }
    }
}

impl ReplyClassifier for KeywordClassifier {
    fn classify(&self, reply: &str) -> ReplyFlags {
        let is_hallucination = self.hallucination_phrases.matches(reply);
        let is_offtopic = self.offtopic_markers.matches(reply);
        // Length is measured in characters so non-Latin replies are not favored.
        let is_good_answer =
            reply.chars().count() > self.min_answer_length && !is_hallucination && !is_offtopic;
        ReplyFlags {
            is_hallucination,
            is_offtopic,
            is_good_answer,
        }
    }
}

/// Label for a reply. Exactly one applies per turn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Hallucination,
    OffTopic,
    GoodAnswer,
    WeakAnswer,
}

impl Category {
    /// Picks the label by fixed priority.
    pub fn from_flags(flags: ReplyFlags) -> Self {
        if flags.is_hallucination {
            Category::Hallucination
        } else if flags.is_offtopic {
            Category::OffTopic
        } else if flags.is_good_answer {
            Category::GoodAnswer
        } else {
            Category::WeakAnswer
        }
    }

    pub fn score_delta(self) -> i64 {
        match self {
            Category::GoodAnswer => 1,
            Category::Hallucination => -2,
            Category::OffTopic | Category::WeakAnswer => -1,
        }
    }

    pub fn next_action(self) -> NextAction {
        match self {
            Category::Hallucination => NextAction::Correct,
            Category::OffTopic => NextAction::AnswerAndAsk,
            Category::GoodAnswer => NextAction::Escalate,
            Category::WeakAnswer => NextAction::Simplify,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Hallucination => "Hallucination",
            Category::OffTopic => "Off-topic",
            Category::GoodAnswer => "Good answer",
            Category::WeakAnswer => "Weak answer",
        };
        f.write_str(label)
    }
}

/// What the interviewer intends to do after a reply. Only used in the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Correct,
    AnswerAndAsk,
    Escalate,
    Simplify,
}

impl fmt::Display for NextAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NextAction::Correct => "correct",
            NextAction::AnswerAndAsk => "answer and ask",
            NextAction::Escalate => "escalate",
            NextAction::Simplify => "simplify",
        };
        f.write_str(label)
    }
}

/// The observer's verdict on a single reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflection {
    pub category: Category,
    pub score_delta: i64,
    pub flags: ReplyFlags,
}

impl Reflection {
    pub fn from_flags(flags: ReplyFlags) -> Self {
        let category = Category::from_flags(flags);
        Self {
            category,
            score_delta: category.score_delta(),
            flags,
        }
    }

    pub fn next_action(&self) -> NextAction {
        self.category.next_action()
    }
}

/// Classifies replies and folds the result into the session score.
pub struct ObserverAnalyzer {
    classifier: Box<dyn ReplyClassifier>,
}

impl ObserverAnalyzer {
    pub fn new(classifier: Box<dyn ReplyClassifier>) -> Self {
        Self { classifier }
    }

    /// Classifies a reply without touching any session state.
    pub fn classify(&self, reply: &str) -> Reflection {
        Reflection::from_flags(self.classifier.classify(reply))
    }

    /// Classifies a reply and adds its score delta to `state.performance_score`.
    pub fn observe(&self, reply: &str, state: &mut SessionState) -> Reflection {
        let reflection = self.classify(reply);
        state.performance_score = state
            .performance_score
            .saturating_add(reflection.score_delta);
        debug!(
            category = %reflection.category,
            delta = reflection.score_delta,
            score = state.performance_score,
            "Observer reflection"
        );
        reflection
    }
}
