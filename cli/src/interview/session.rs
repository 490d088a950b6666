//! # CoachRS Interview Session
//!
//! File: cli/src/interview/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `InterviewSession` owns all mutable interview state and runs the per-turn
//! pipeline, calling each component exactly once:
//!
//! 1. Observer classifies the reply and updates the cumulative score
//! 2. Difficulty adjuster picks the tier from the new score and the flags
//! 3. Question bank selects the next unasked question for that tier
//! 4. Correction prefixes are injected ahead of the question
//! 5. Skill tracker records the outcome against the emitted question's topic
//! 6. A `TurnRecord` is appended to the log
//!
//! ## Architecture
//!
//! All mutable data lives in one explicit `SessionState` value. Components
//! never hold state of their own; they receive the pieces they need by
//! reference. The pipeline is synchronous and infallible. Only
//! `generate_feedback`, which hands the transcript to a `TranscriptSink`,
//! can fail.
//!
//! ## Examples
//!
//! ```rust
//! let (mut session, opening) = InterviewSession::initialize(&config, candidate);
//! println!("{}", opening);
//! let next = session.process_turn("I have two years of experience with Django");
//! let log = session.generate_feedback(&JsonFileSink::new("interview_log.json"))?;
//! ```
//!
use crate::core::config::{Config, CorrectionsConfig};
use crate::core::error::Result;
use crate::interview::difficulty::{self, Difficulty};
use crate::interview::feedback::{FeedbackSynthesizer, InterviewLog};
use crate::interview::observer::{KeywordClassifier, ObserverAnalyzer, ReplyClassifier, ReplyFlags};
use crate::interview::question_bank::{AskedQuestions, QuestionBank};
use crate::interview::skills::{SkillLedger, SkillTracker};
use crate::interview::transcript::TranscriptSink;
use crate::interview::turn::TurnRecord;
use tracing::{debug, info};

/// Who is being interviewed. Set once when the session starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub position: String,
    pub grade: String,
    pub experience: String,
}

/// Everything that changes during an interview.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub candidate: Candidate,
    /// Id of the most recent turn; 0 before the opening turn is recorded.
    pub current_turn: u32,
    /// Unbounded; only the confidence derived from it is clamped.
    pub performance_score: i64,
    pub difficulty: Difficulty,
    pub asked_questions: AskedQuestions,
    pub skills: SkillLedger,
    pub turns: Vec<TurnRecord>,
}

impl SessionState {
    pub fn new(candidate: Candidate) -> Self {
        Self {
            candidate,
            current_turn: 0,
            performance_score: 0,
            difficulty: Difficulty::default(),
            asked_questions: AskedQuestions::default(),
            skills: SkillLedger::default(),
            turns: Vec::new(),
        }
    }
}

/// Prepends the hallucination correction and then the off-topic redirect,
/// each only when its flag is set.
pub fn inject_corrections(question: &str, flags: &ReplyFlags, corrections: &CorrectionsConfig) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if flags.is_hallucination {
        parts.push(&corrections.hallucination_prefix);
    }
    if flags.is_offtopic {
        parts.push(&corrections.offtopic_prefix);
    }
    parts.retain(|p| !p.trim().is_empty());
    parts.push(question);
    parts.join(" ")
}

/// Fills `{name}`, `{position}`, `{grade}` and `{experience}` in one pass.
/// Placeholders inside the substituted values are left as they are.
fn render_greeting(template: &str, candidate: &Candidate) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        rendered.push_str(&rest[..start]);
        let tail = &rest[start..];
        let field = tail.find('}').and_then(|end| {
            let value = match &tail[1..end] {
                "name" => &candidate.name,
                "position" => &candidate.position,
                "grade" => &candidate.grade,
                "experience" => &candidate.experience,
                _ => return None,
            };
            Some((value, end))
        });
        match field {
            Some((value, end)) => {
                rendered.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                rendered.push('{');
                rest = &tail[1..];
            }
        }
    }
    rendered.push_str(rest);
    rendered
}

pub struct InterviewSession {
    state: SessionState,
    observer: ObserverAnalyzer,
    bank: QuestionBank,
    corrections: CorrectionsConfig,
    skills: SkillTracker,
    feedback: FeedbackSynthesizer,
}

impl InterviewSession {
    /// Starts a session with the keyword classifier from `config.observer`.
    /// Returns the session and the opening prompt (recorded as turn 1).
    pub fn initialize(config: &Config, candidate: Candidate) -> (Self, String) {
        let classifier = KeywordClassifier::from_config(&config.observer);
        Self::with_classifier(config, candidate, Box::new(classifier))
    }

    /// Starts a session with a caller-supplied reply classifier.
    pub fn with_classifier(
        config: &Config,
        candidate: Candidate,
        classifier: Box<dyn ReplyClassifier>,
    ) -> (Self, String) {
        let greeting = render_greeting(&config.session.greeting, &candidate);
        let mut state = SessionState::new(candidate);
        state.current_turn = 1;
        state.turns.push(TurnRecord::opening(greeting.clone()));
        info!(
            "Interview started for '{}' ({}, {}).",
            state.candidate.name, state.candidate.position, state.candidate.grade
        );

        let session = Self {
            state,
            observer: ObserverAnalyzer::new(classifier),
            bank: QuestionBank::from_config(&config.questions),
            corrections: config.corrections.clone(),
            skills: SkillTracker::from_config(&config.skills),
            feedback: FeedbackSynthesizer::from_config(&config.feedback),
        };
        (session, greeting)
    }

    /// Processes one candidate reply and returns the next prompt.
    pub fn process_turn(&mut self, reply: &str) -> String {
        let state = &mut self.state;
        state.current_turn += 1;

        let reflection = self.observer.observe(reply, state);
        let tier = difficulty::next_tier(state.performance_score, &reflection.flags);
        state.difficulty = tier;

        let question = self.bank.select(tier, &mut state.asked_questions);
        let prompt = inject_corrections(question, &reflection.flags, &self.corrections);

        let topic = self
            .skills
            .record(&prompt, reflection.flags.is_good_answer, &mut state.skills);

        let thoughts = format!(
            "[Observer]: {} | [Interviewer]: {} (difficulty: {})",
            reflection.category,
            reflection.next_action(),
            tier
        );
        debug!(
            turn = state.current_turn,
            %tier,
            topic = %topic,
            asked = state.asked_questions.len(),
            "Turn processed"
        );
        state.turns.push(TurnRecord::new(
            state.current_turn,
            prompt.clone(),
            reply,
            thoughts,
        ));
        prompt
    }

    /// Builds the final report, hands it to `sink`, and returns it.
    ///
    /// Sink errors are returned as-is; the session itself is left untouched,
    /// so the caller may retry with a different sink.
    pub fn generate_feedback(&self, sink: &dyn TranscriptSink) -> Result<InterviewLog> {
        let log = self.feedback.assemble(&self.state);
        info!(
            "Final verdict for '{}': {:?}, score {}.",
            log.participant_name, log.final_feedback.verdict.grade, self.state.performance_score
        );
        sink.persist(&log)?;
        Ok(log)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn turns(&self) -> &[TurnRecord] {
        &self.state.turns
    }
}
