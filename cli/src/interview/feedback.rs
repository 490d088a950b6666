//! # CoachRS Feedback Synthesizer
//!
//! File: cli/src/interview/feedback.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs once at the end of a session and turns the accumulated state into the
//! final report:
//! - **verdict**: grade, hiring recommendation, and a clamped confidence value,
//!   all step functions of the cumulative score
//! - **technical_review**: the skill ledger, verbatim
//! - **soft_skills**: clarity, honesty, and engagement, from simple scans over
//!   every reply in the transcript
//! - **roadmap**: a static list from configuration
//!
//! The report types double as the persisted JSON schema, so field names and
//! label spellings here are part of the transcript format.
//!
use crate::core::config::FeedbackConfig;
use crate::interview::matching::KeywordSet;
use crate::interview::session::SessionState;
use crate::interview::skills::SkillLedger;
use crate::interview::turn::TurnRecord;
use serde::{Deserialize, Serialize};

/// Scores strictly above this earn a Senior grade.
pub const SENIOR_SCORE_THRESHOLD: i64 = 3;
/// Scores strictly above this earn a Middle grade.
pub const MIDDLE_SCORE_THRESHOLD: i64 = 0;

pub const MIN_CONFIDENCE: i64 = 10;
pub const MAX_CONFIDENCE: i64 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    Junior,
    Middle,
    Senior,
}

impl Grade {
    pub fn from_score(score: i64) -> Self {
        if score > SENIOR_SCORE_THRESHOLD {
            Grade::Senior
        } else if score > MIDDLE_SCORE_THRESHOLD {
            Grade::Middle
        } else {
            Grade::Junior
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiringRecommendation {
    #[serde(rename = "Hire")]
    Hire,
    #[serde(rename = "No Hire")]
    NoHire,
}

impl HiringRecommendation {
    pub fn from_score(score: i64) -> Self {
        if score >= 0 {
            HiringRecommendation::Hire
        } else {
            HiringRecommendation::NoHire
        }
    }
}

/// `50 + score * 10`, clamped to `[10, 100]`.
pub fn confidence(score: i64) -> u8 {
    50_i64
        .saturating_add(score.saturating_mul(10))
        .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

/// Heuristic soft-skill rating.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub grade: Grade,
    pub hiring_recommendation: HiringRecommendation,
    pub confidence: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SoftSkills {
    pub clarity: Level,
    pub honesty: Level,
    pub engagement: Level,
}

/// The `final_feedback` section of the transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FeedbackReport {
    pub verdict: Verdict,
    pub technical_review: SkillLedger,
    pub soft_skills: SoftSkills,
    pub roadmap: Vec<String>,
}

/// The complete persisted transcript.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InterviewLog {
    pub participant_name: String,
    pub turns: Vec<TurnRecord>,
    pub final_feedback: FeedbackReport,
}

#[derive(Debug, Clone)]
pub struct FeedbackSynthesizer {
    roadmap: Vec<String>,
    clarity_min_length: usize,
    honesty_markers: KeywordSet,
    engagement_markers: KeywordSet,
}

impl FeedbackSynthesizer {
    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self {
            roadmap: config.roadmap.clone(),
            clarity_min_length: config.clarity_min_length,
            honesty_markers: KeywordSet::new(&config.honesty_markers),
            engagement_markers: KeywordSet::new(&config.engagement_markers),
        }
    }

    pub fn soft_skills(&self, turns: &[TurnRecord]) -> SoftSkills {
        let replies = || turns.iter().map(|t| t.user_message.as_str());
        let clarity = if replies().any(|r| r.chars().count() > self.clarity_min_length) {
            Level::High
        } else {
            Level::Medium
        };
        let honesty = if replies().any(|r| self.honesty_markers.matches(r)) {
            Level::Low
        } else {
            Level::High
        };
        let engagement = if replies().any(|r| self.engagement_markers.matches(r)) {
            Level::High
        } else {
            Level::Medium
        };
        SoftSkills {
            clarity,
            honesty,
            engagement,
        }
    }

    pub fn synthesize(&self, state: &SessionState) -> FeedbackReport {
        let score = state.performance_score;
        FeedbackReport {
            verdict: Verdict {
                grade: Grade::from_score(score),
                hiring_recommendation: HiringRecommendation::from_score(score),
                confidence: confidence(score),
            },
            technical_review: state.skills.clone(),
            soft_skills: self.soft_skills(&state.turns),
            roadmap: self.roadmap.clone(),
        }
    }

    /// Combines identity, the full turn log, and the report into one transcript.
    pub fn assemble(&self, state: &SessionState) -> InterviewLog {
        InterviewLog {
            participant_name: state.candidate.name.clone(),
            turns: state.turns.clone(),
            final_feedback: self.synthesize(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::session::Candidate;

    fn synthesizer() -> FeedbackSynthesizer {
        FeedbackSynthesizer::from_config(&FeedbackConfig::default())
    }

    fn state_with_replies(replies: &[&str]) -> SessionState {
        let mut state = SessionState::new(Candidate::default());
        for (i, reply) in replies.iter().enumerate() {
            state
                .turns
                .push(TurnRecord::new(i as u32 + 1, "Q?", *reply, ""));
        }
        state
    }

    #[test]
    fn grade_thresholds() {
        assert_eq!(Grade::from_score(-7), Grade::Junior);
        assert_eq!(Grade::from_score(0), Grade::Junior);
        assert_eq!(Grade::from_score(1), Grade::Middle);
        assert_eq!(Grade::from_score(3), Grade::Middle);
        assert_eq!(Grade::from_score(4), Grade::Senior);
    }

    #[test]
    fn grade_never_decreases_as_score_grows() {
        let grades: Vec<Grade> = (-10..=10).map(Grade::from_score).collect();
        assert!(grades.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn hiring_recommendation_is_positive_at_zero() {
        assert_eq!(HiringRecommendation::from_score(0), HiringRecommendation::Hire);
        assert_eq!(HiringRecommendation::from_score(-1), HiringRecommendation::NoHire);
    }

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(confidence(0), 50);
        assert_eq!(confidence(2), 70);
        assert_eq!(confidence(-4), 10);
        assert_eq!(confidence(5), 100);
        assert_eq!(confidence(i64::MAX), 100);
        assert_eq!(confidence(i64::MIN), 10);
        for score in -100..=100 {
            assert!((10..=100).contains(&confidence(score)));
        }
    }

    #[test]
    fn soft_skills_defaults_for_quiet_candidate() {
        let skills = synthesizer().soft_skills(&state_with_replies(&["", "ok"]).turns);
        assert_eq!(
            skills,
            SoftSkills {
                clarity: Level::Medium,
                honesty: Level::High,
                engagement: Level::Medium,
            }
        );
    }

    #[test]
    fn soft_skills_react_to_length_and_markers() {
        let state = state_with_replies(&[
            "I have spent the last two years building REST services in Django.",
            "Python 4 removes the GIL, right?",
            "And what about the probation period?",
        ]);
        let skills = synthesizer().soft_skills(&state.turns);
        assert_eq!(skills.clarity, Level::High);
        assert_eq!(skills.honesty, Level::Low);
        assert_eq!(skills.engagement, Level::High);
    }

    #[test]
    fn synthesize_copies_ledger_and_roadmap() {
        let mut state = state_with_replies(&[""]);
        state.performance_score = 2;
        state.skills.confirmed_skills.push("SQL".into());
        state.skills.knowledge_gaps.push("Python: review the fundamentals".into());

        let report = synthesizer().synthesize(&state);
        assert_eq!(report.verdict.grade, Grade::Middle);
        assert_eq!(report.verdict.hiring_recommendation, HiringRecommendation::Hire);
        assert_eq!(report.verdict.confidence, 70);
        assert_eq!(report.technical_review, state.skills);
        assert_eq!(report.roadmap, FeedbackConfig::default().roadmap);
    }

    #[test]
    fn labels_serialize_as_transcript_strings() {
        let verdict = Verdict {
            grade: Grade::Senior,
            hiring_recommendation: HiringRecommendation::NoHire,
            confidence: 10,
        };
        let value = serde_json::to_value(&verdict).unwrap();
        assert_eq!(value["grade"], "Senior");
        assert_eq!(value["hiring_recommendation"], "No Hire");
        assert_eq!(serde_json::to_value(Level::High).unwrap(), "high");
    }
}
