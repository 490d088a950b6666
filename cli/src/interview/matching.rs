//! # CoachRS Keyword Tables
//!
//! File: cli/src/interview/matching.rs
//! Author: Christi Mahu
//!
//! Every rule table in CoachRS (hallucination phrases, off-topic markers,
//! soft-skill markers, stop keywords) is matched the same way: a
//! case-insensitive substring search over the raw text. `KeywordSet` owns the
//! lower-cased entries so each table is normalized exactly once.
//!
/// A lower-cased set of substrings matched case-insensitively against text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    entries: Vec<String>,
}

impl KeywordSet {
    /// Builds a set from any list of strings, lower-casing each entry.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns the first entry found anywhere in `text`, ignoring case.
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.as_str()))
            .map(String::as_str)
    }

    /// True if any entry occurs in `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        self.find_in(text).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_substring_ignoring_case() {
        let set = KeywordSet::new(["Python 4", "probation"]);
        assert!(set.matches("I heard PYTHON 4.0 drops loops"));
        assert!(set.matches("what happens during the probationary period?"));
        assert!(!set.matches("I use Python 3.12"));
    }

    #[test]
    fn find_in_returns_first_configured_entry() {
        let set = KeywordSet::new(["stop", "feedback"]);
        assert_eq!(set.find_in("Feedback please, then stop"), Some("stop"));
        assert_eq!(set.find_in("keep going"), None);
    }

    #[test]
    fn empty_set_never_matches() {
        let set = KeywordSet::default();
        assert!(!set.matches(""));
        assert!(!set.matches("anything"));
    }

    #[test]
    fn handles_non_ascii_case_folding() {
        let set = KeywordSet::new(["СТОП"]);
        assert!(set.matches("ну всё, стоп"));
    }
}
