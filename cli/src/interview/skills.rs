//! # CoachRS Skill Tracker
//!
//! File: cli/src/interview/skills.rs
//! Author: Christi Mahu
//!
//! Infers a topic for each emitted question and records it either as a
//! confirmed skill (good answer) or as a knowledge gap (anything else).
//! Topic inference looks at the question text actually shown to the
//! candidate, correction prefixes included, never at the reply.
//!
use crate::core::config::SkillsConfig;
use serde::{Deserialize, Serialize};

/// Confirmed skills and knowledge gaps, in the order they were observed.
///
/// Both lists are append-only and keep duplicates. This is also the
/// `technical_review` section of the final feedback.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillLedger {
    pub confirmed_skills: Vec<String>,
    pub knowledge_gaps: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SkillTracker {
    /// (lower-cased keyword, topic label), checked in order.
    rules: Vec<(String, String)>,
    default_topic: String,
    gap_note: String,
}

impl SkillTracker {
    pub fn from_config(config: &SkillsConfig) -> Self {
        Self {
            rules: config
                .topics
                .iter()
                .map(|rule| (rule.keyword.to_lowercase(), rule.topic.clone()))
                .collect(),
            default_topic: config.default_topic.clone(),
            gap_note: config.gap_note.clone(),
        }
    }

    /// First matching keyword wins; otherwise the catch-all topic.
    pub fn infer_topic(&self, question: &str) -> &str {
        let lowered = question.to_lowercase();
        self.rules
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(_, topic)| topic.as_str())
            .unwrap_or(&self.default_topic)
    }

    pub fn gap_note(&self, topic: &str) -> String {
        self.gap_note.replace("{topic}", topic)
    }

    /// Records the outcome for `question` and returns the inferred topic.
    pub fn record(&self, question: &str, good_answer: bool, ledger: &mut SkillLedger) -> String {
        let topic = self.infer_topic(question).to_string();
        if good_answer {
            ledger.confirmed_skills.push(topic.clone());
        } else {
            ledger.knowledge_gaps.push(self.gap_note(&topic));
        }
        topic
    }
}
