//! # CoachRS CLI Interview Integration Tests
//!
//! File: cli/tests/interview.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives `coachrs interview` through stdin exactly as a person would: one
//! reply per line, finishing with a stop keyword or end of input.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_interview_until_stop_keyword() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("alex.json");

    isolated_cmd(dir.path())
        .args(["interview", "--name", "Alex", "--experience", "Django pet projects"])
        .arg("--output")
        .arg(&output)
        .write_stdin("I have two years of experience with Django and REST APIs\nFeedback please\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Tell me about your experience with Django pet projects.")
                .and(predicate::str::contains("🤖 Interviewer: How does a SQL JOIN work?"))
                .and(predicate::str::contains("Feedback ready:")),
        );

    let transcript = read_transcript(&output);
    assert_eq!(transcript["participant_name"], "Alex");
    let turns = transcript["turns"].as_array().unwrap();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[1]["user_message"], "I have two years of experience with Django and REST APIs");
    assert_eq!(
        transcript["final_feedback"]["technical_review"]["confirmed_skills"],
        serde_json::json!(["SQL"])
    );
}

#[test]
fn test_interview_finishes_at_end_of_input() {
    let dir = tempdir().unwrap();

    isolated_cmd(dir.path())
        .args(["interview", "--name", "Alex"])
        .write_stdin("not sure\n")
        .assert()
        .success();

    // Default transcript path is relative to the working directory.
    let transcript = read_transcript(&dir.path().join("interview_log.json"));
    assert_eq!(transcript["turns"].as_array().unwrap().len(), 2);
    assert_eq!(transcript["final_feedback"]["verdict"]["grade"], "Junior");
    assert_eq!(
        transcript["final_feedback"]["verdict"]["hiring_recommendation"],
        "No Hire"
    );
    assert_eq!(transcript["final_feedback"]["verdict"]["confidence"], 40);
}

#[test]
fn test_interview_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let blocker = write_file(&dir, "blocker", "");

    isolated_cmd(dir.path())
        .args(["interview", "--name", "Alex"])
        .arg("--output")
        .arg(blocker.join("log.json"))
        .write_stdin("stop\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to save interview transcript"));
}

#[test]
fn test_interview_name_from_environment() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("env.json");

    isolated_cmd(dir.path())
        .env("COACHRS_NAME", "Sam")
        .arg("interview")
        .arg("--output")
        .arg(&output)
        .write_stdin("stop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hi, Sam!"));

    assert_eq!(read_transcript(&output)["participant_name"], "Sam");
}
