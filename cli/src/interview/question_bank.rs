//! # CoachRS Question Bank
//!
//! File: cli/src/interview/question_bank.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Holds one ordered pool of questions per difficulty tier and hands out the
//! next question that has not been asked yet in this session.
//!
//! ## Architecture
//!
//! - `AskedQuestions` is the session-wide dedup set. Entries are case-folded,
//!   and the set is shared across all tiers, so a question that appears in two
//!   pools is only ever asked once.
//! - `QuestionBank::select` scans a tier in order and returns the first unasked
//!   entry, recording it. When the tier is exhausted it returns the fallback
//!   prompt, which is deliberately not recorded and can therefore recur.
//!   Pools are never replenished.
//!
use crate::core::config::QuestionsConfig;
use crate::interview::difficulty::Difficulty;
use std::collections::HashSet;
use tracing::info;

/// Normalized texts of every question asked so far. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AskedQuestions {
    seen: HashSet<String>,
}

impl AskedQuestions {
    fn normalize(question: &str) -> String {
        question.to_lowercase()
    }

    pub fn contains(&self, question: &str) -> bool {
        self.seen.contains(&Self::normalize(question))
    }

    /// Records a question. Returns `false` if it had already been asked.
    pub fn insert(&mut self, question: &str) -> bool {
        self.seen.insert(Self::normalize(question))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Per-tier question pools plus the exhaustion fallback.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
    fallback: String,
}

impl QuestionBank {
    pub fn from_config(config: &QuestionsConfig) -> Self {
        Self {
            easy: config.easy.clone(),
            medium: config.medium.clone(),
            hard: config.hard.clone(),
            fallback: config.fallback.clone(),
        }
    }

    pub fn pool(&self, tier: Difficulty) -> &[String] {
        match tier {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the next unasked question for `tier` and records it in `asked`.
    pub fn select(&self, tier: Difficulty, asked: &mut AskedQuestions) -> &str {
        match self.pool(tier).iter().find(|q| !asked.contains(q)) {
            Some(question) => {
                asked.insert(question);
                question
            }
            None => {
                info!("Question pool '{}' exhausted, using fallback prompt.", tier);
                self.fallback()
            }
        }
    }
}
