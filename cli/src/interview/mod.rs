//! # CoachRS Interview Engine
//!
//! File: cli/src/interview/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module holds the turn-processing core of CoachRS. It contains every
//! piece of decision logic in the application; the `commands` modules only
//! read replies, print prompts, and pick where the transcript goes.
//!
//! ## Architecture
//!
//! Components, leaves first:
//! - `turn`: `TurnRecord`, the immutable log entry for one exchange
//! - `matching`: `KeywordSet`, the case-insensitive substring tables
//! - `observer`: reply classification and score deltas
//! - `difficulty`: tier selection from score and flags
//! - `question_bank`: per-tier pools with global deduplication
//! - `skills`: confirmed skills and knowledge gaps by topic
//! - `feedback`: the end-of-session verdict and transcript types
//! - `transcript`: where finished transcripts are persisted
//! - `session`: `InterviewSession`, which owns the state and runs each turn
//!
pub mod difficulty;
pub mod feedback;
pub mod matching;
pub mod observer;
pub mod question_bank;
pub mod session;
pub mod skills;
pub mod transcript;
pub mod turn;
