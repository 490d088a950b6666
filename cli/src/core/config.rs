//! # CoachRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for running real hiring interviews.
//!
//! ## Overview
//!
//! This module implements the configuration system for CoachRS, handling loading,
//! merging, validation, and access to configuration data. Every rule table the
//! interview engine consults lives here rather than in code:
//! - Hallucination phrases and off-topic markers used by the observer
//! - The easy/medium/hard question pools and the fallback prompt
//! - Correction prefixes injected ahead of the next question
//! - The topic vocabulary used for skill tracking
//! - Soft-skill markers and the static improvement roadmap
//! - Stop keywords and the transcript output path
//!
//! ## Architecture
//!
//! Every matching table follows the same rule: a case-insensitive substring
//! match against the raw reply (or question, for topics). Consumers lower-case
//! the tables once when they are built, so the TOML may use any casing.
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit `--config <path>` file (replaces 2 and 3 entirely)
//! 2. Project-specific `.coachrs.toml` in current directory or ancestors
//! 3. User-specific `~/.config/coachrs/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//!
//! // Access the hard question pool
//! let hard = &cfg.questions.hard;
//!
//! // Where will the transcript be written?
//! let path = &cfg.session.transcript_path;
//! ```
//!
use crate::core::error::{CoachError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub observer: ObserverConfig,
    pub questions: QuestionsConfig,
    pub corrections: CorrectionsConfig,
    pub skills: SkillsConfig,
    pub feedback: FeedbackConfig,
    pub session: SessionConfig,
}

/// Rule tables for classifying candidate replies.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverConfig {
    /// Known-false technical claims. Any match flags the reply as a hallucination.
    pub hallucination_phrases: Vec<String>,
    /// Forbidden-topic markers (compensation, workload, ...).
    pub offtopic_markers: Vec<String>,
    /// A reply must be strictly longer than this (in characters) to count as a good answer.
    pub min_answer_length: usize,
}

/// Ordered question pools, one per difficulty tier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct QuestionsConfig {
    pub easy: Vec<String>,
    pub medium: Vec<String>,
    pub hard: Vec<String>,
    /// Asked when a tier is exhausted. Never recorded as asked, so it may recur.
    pub fallback: String,
}

/// Sentences prepended to the next question when the reply needs correcting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CorrectionsConfig {
    pub hallucination_prefix: String,
    pub offtopic_prefix: String,
}

/// Topic inference for the skill tracker.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SkillsConfig {
    /// Used when no keyword in `topics` matches the question.
    pub default_topic: String,
    /// Knowledge-gap note; `{topic}` is replaced with the inferred topic.
    pub gap_note: String,
    /// Checked in order, first match wins.
    pub topics: Vec<TopicRule>,
}

/// A single keyword-to-topic mapping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TopicRule {
    pub keyword: String,
    pub topic: String,
}

/// Heuristics and static content for the final feedback report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FeedbackConfig {
    pub roadmap: Vec<String>,
    pub clarity_min_length: usize,
    pub honesty_markers: Vec<String>,
    pub engagement_markers: Vec<String>,
}

/// Session-level settings used by the drivers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Opening prompt. Supports `{name}`, `{position}`, `{grade}` and `{experience}`.
    pub greeting: String,
    /// A reply containing any of these ends the interview and triggers feedback.
    pub stop_keywords: Vec<String>,
    /// Where the JSON transcript is written (can use ~). Will be expanded.
    pub transcript_path: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            hallucination_phrases: strings(&["python 4", "neural connections"]),
            offtopic_markers: strings(&["probation", "microservice", "tasks", "salary"]),
            min_answer_length: 20,
        }
    }
}

impl Default for QuestionsConfig {
    fn default() -> Self {
        Self {
            easy: strings(&[
                "What is a list in Python?",
                "What is the difference between GET and POST?",
                "What is a Git commit?",
            ]),
            medium: strings(&[
                "How does a SQL JOIN work?",
                "List vs tuple: when would you pick each?",
                "How does the Django ORM build queries?",
            ]),
            hard: strings(&[
                "What is the Python GIL and when does it matter?",
                "When would you reach for Celery?",
                "How do you optimize a slow SQL query?",
            ]),
            fallback: "Tell me about your most recent project.".to_string(),
        }
    }
}

impl Default for CorrectionsConfig {
    fn default() -> Self {
        Self {
            hallucination_prefix: "Python 4.0 does not exist (current releases are 3.12+)."
                .to_string(),
            offtopic_prefix: "We build on microservices here; let's get back to the interview."
                .to_string(),
        }
    }
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            default_topic: "Django".to_string(),
            gap_note: "{topic}: review the fundamentals".to_string(),
            topics: vec![
                TopicRule {
                    keyword: "python".into(),
                    topic: "Python".into(),
                },
                TopicRule {
                    keyword: "sql".into(),
                    topic: "SQL".into(),
                },
            ],
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            roadmap: strings(&["Python 3.12+", "SQL JOINs", "Django ORM docs"]),
            clarity_min_length: 50,
            honesty_markers: strings(&["python 4"]),
            engagement_markers: strings(&["probation"]),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            greeting: "Hi, {name}! Position: {position} ({grade}). Tell me about your experience with {experience}."
                .to_string(),
            stop_keywords: strings(&["stop", "feedback"]),
            transcript_path: "interview_log.json".to_string(),
        }
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".coachrs.toml";

/// Loads, merges, expands, and validates the effective configuration.
///
/// When `explicit` is given, only that file is read (on top of the built-in
/// defaults); otherwise the user and project files are merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut merged_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "CoachRS", "coachrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.coachrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => return Ok(None),
        }
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project value wins when it was actually changed from the built-in default.
fn prefer<T: PartialEq>(project: T, user: T, default: &T) -> T {
    if project != *default {
        project
    } else {
        user
    }
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let d = Config::default();
    Config {
        observer: ObserverConfig {
            hallucination_phrases: prefer(
                project.observer.hallucination_phrases,
                user.observer.hallucination_phrases,
                &d.observer.hallucination_phrases,
            ),
            offtopic_markers: prefer(
                project.observer.offtopic_markers,
                user.observer.offtopic_markers,
                &d.observer.offtopic_markers,
            ),
            min_answer_length: prefer(
                project.observer.min_answer_length,
                user.observer.min_answer_length,
                &d.observer.min_answer_length,
            ),
        },
        questions: QuestionsConfig {
            easy: prefer(project.questions.easy, user.questions.easy, &d.questions.easy),
            medium: prefer(
                project.questions.medium,
                user.questions.medium,
                &d.questions.medium,
            ),
            hard: prefer(project.questions.hard, user.questions.hard, &d.questions.hard),
            fallback: prefer(
                project.questions.fallback,
                user.questions.fallback,
                &d.questions.fallback,
            ),
        },
        corrections: CorrectionsConfig {
            hallucination_prefix: prefer(
                project.corrections.hallucination_prefix,
                user.corrections.hallucination_prefix,
                &d.corrections.hallucination_prefix,
            ),
            offtopic_prefix: prefer(
                project.corrections.offtopic_prefix,
                user.corrections.offtopic_prefix,
                &d.corrections.offtopic_prefix,
            ),
        },
        skills: SkillsConfig {
            default_topic: prefer(
                project.skills.default_topic,
                user.skills.default_topic,
                &d.skills.default_topic,
            ),
            gap_note: prefer(project.skills.gap_note, user.skills.gap_note, &d.skills.gap_note),
            topics: prefer(project.skills.topics, user.skills.topics, &d.skills.topics),
        },
        feedback: FeedbackConfig {
            roadmap: prefer(project.feedback.roadmap, user.feedback.roadmap, &d.feedback.roadmap),
            clarity_min_length: prefer(
                project.feedback.clarity_min_length,
                user.feedback.clarity_min_length,
                &d.feedback.clarity_min_length,
            ),
            honesty_markers: prefer(
                project.feedback.honesty_markers,
                user.feedback.honesty_markers,
                &d.feedback.honesty_markers,
            ),
            engagement_markers: prefer(
                project.feedback.engagement_markers,
                user.feedback.engagement_markers,
                &d.feedback.engagement_markers,
            ),
        },
        session: SessionConfig {
            greeting: prefer(project.session.greeting, user.session.greeting, &d.session.greeting),
            stop_keywords: prefer(
                project.session.stop_keywords,
                user.session.stop_keywords,
                &d.session.stop_keywords,
            ),
            transcript_path: prefer(
                project.session.transcript_path,
                user.session.transcript_path,
                &d.session.transcript_path,
            ),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.session.transcript_path =
        shellexpand::tilde(&config.session.transcript_path).into_owned();
    debug!(
        "Expanded transcript path: {}",
        config.session.transcript_path
    );
}

/// Rejects tables that would make the matching rules meaningless.
pub fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    let tables = [
        (
            "observer.hallucination_phrases",
            config.observer.hallucination_phrases.as_slice(),
        ),
        ("observer.offtopic_markers", config.observer.offtopic_markers.as_slice()),
        ("feedback.honesty_markers", config.feedback.honesty_markers.as_slice()),
        ("feedback.engagement_markers", config.feedback.engagement_markers.as_slice()),
        ("session.stop_keywords", config.session.stop_keywords.as_slice()),
    ];
    for (name, entries) in tables {
        // An empty substring matches every reply.
        if entries.iter().any(|e| e.trim().is_empty()) {
            return Err(anyhow!(CoachError::Config(format!(
                "'{}' contains an empty entry.",
                name
            ))));
        }
    }
    if config.session.stop_keywords.is_empty() {
        return Err(anyhow!(CoachError::Config(
            "'session.stop_keywords' must contain at least one keyword.".to_string()
        )));
    }
    if config.questions.fallback.trim().is_empty() {
        return Err(anyhow!(CoachError::Config(
            "'questions.fallback' must not be empty.".to_string()
        )));
    }
    if let Some(rule) = config
        .skills
        .topics
        .iter()
        .find(|r| r.keyword.trim().is_empty())
    {
        return Err(anyhow!(CoachError::Config(format!(
            "Topic '{}' has an empty keyword.",
            rule.topic
        ))));
    }
    if !config.skills.gap_note.contains("{topic}") {
        return Err(anyhow!(CoachError::Config(format!(
            "'skills.gap_note' must contain the {{topic}} placeholder (got '{}').",
            config.skills.gap_note
        ))));
    }
    info!("Configuration validation successful.");
    Ok(())
}
