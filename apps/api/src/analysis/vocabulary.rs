//! Skill vocabulary and keyword detection.
//!
//! The vocabulary is a fixed list of lower-case keywords, immutable for the
//! lifetime of the process. Detection is case-insensitive substring
//! containment by default; a stricter word-boundary mode is available behind
//! a configuration flag.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

const DEFAULT_VOCABULARY: &str = include_str!("../../config/skills.json");

/// How vocabulary entries are matched against text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Plain substring containment. Over-matches inside larger words
    /// ("go" is found in "mango"); kept as the documented default behavior.
    #[default]
    Substring,
    /// An occurrence only counts when neither neighboring character is ASCII
    /// alphanumeric, so "go" no longer matches inside "mango" while "c++"
    /// still matches at the end of a sentence.
    WordBoundary,
}

/// Fixed, ordered list of canonical lower-case skill keywords.
pub struct SkillVocabulary {
    entries: Vec<String>,
    /// Compiled word-boundary patterns, one per entry, in entry order.
    bounded: Vec<Regex>,
}

impl SkillVocabulary {
    pub fn new(raw: Vec<String>) -> Result<Self> {
        let entries: Vec<String> = raw
            .iter()
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();

        let bounded = entries
            .iter()
            .map(|entry| {
                let pattern = format!("(?:^|[^a-z0-9]){}(?:[^a-z0-9]|$)", regex::escape(entry));
                Regex::new(&pattern)
                    .with_context(|| format!("unusable vocabulary entry '{entry}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries, bounded })
    }

    /// The vocabulary compiled into the binary from `config/skills.json`.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_VOCABULARY)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<String> =
            serde_json::from_str(json).context("vocabulary must be a JSON array of strings")?;
        Self::new(raw)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read vocabulary file {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Detects vocabulary entries in the text. Matched entries are reported
    /// in title case with duplicates collapsed; iteration order of the
    /// returned set is lexicographic. Empty text yields the empty set.
    pub fn detect(&self, text: &str, mode: MatchMode) -> BTreeSet<String> {
        let haystack = normalize(text);
        let mut found = BTreeSet::new();
        for (entry, pattern) in self.entries.iter().zip(&self.bounded) {
            let hit = match mode {
                MatchMode::Substring => haystack.contains(entry.as_str()),
                MatchMode::WordBoundary => pattern.is_match(&haystack),
            };
            if hit {
                found.insert(title_case(entry));
            }
        }
        found
    }
}

/// Lowercases and collapses whitespace runs, so multi-word entries match
/// across line wraps in extracted PDF text.
fn normalize(text: &str) -> String {
    text.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-cases a skill the way the detector reports it: an alphabetic
/// character following a non-alphabetic one is uppercased, every other
/// alphabetic is lowercased. "aws" -> "Aws", "node.js" -> "Node.Js",
/// "machine learning" -> "Machine Learning", "c++" -> "C++".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_boundary = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(entries: &[&str]) -> SkillVocabulary {
        SkillVocabulary::new(entries.iter().map(|e| e.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_detect_is_case_insensitive() {
        let v = vocab(&["python", "aws"]);
        let found = v.detect("PYTHON and Aws everywhere", MatchMode::Substring);
        assert_eq!(
            found.into_iter().collect::<Vec<_>>(),
            vec!["Aws".to_string(), "Python".to_string()]
        );
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let v = SkillVocabulary::builtin().unwrap();
        assert!(v.detect("", MatchMode::Substring).is_empty());
    }

    #[test]
    fn test_detection_is_idempotent() {
        let v = SkillVocabulary::builtin().unwrap();
        let text = "Experienced Python developer with AWS and Docker skills";
        let first = v.detect(text, MatchMode::Substring);
        let second = v.detect(text, MatchMode::Substring);
        assert_eq!(first, second);
    }

    #[test]
    fn test_substring_mode_matches_inside_words() {
        // Characterized behavior: "go" is found inside "mango".
        let v = vocab(&["go"]);
        let found = v.detect("a crate of mango juice", MatchMode::Substring);
        assert!(found.contains("Go"));
    }

    #[test]
    fn test_word_boundary_mode_rejects_embedded_matches() {
        let v = vocab(&["go"]);
        assert!(v
            .detect("a crate of mango juice", MatchMode::WordBoundary)
            .is_empty());
        assert!(v
            .detect("we write Go services", MatchMode::WordBoundary)
            .contains("Go"));
    }

    #[test]
    fn test_word_boundary_mode_handles_punctuated_entries() {
        let v = vocab(&["c++", "node.js"]);
        let found = v.detect("Shipped services in C++ and Node.js", MatchMode::WordBoundary);
        assert!(found.contains("C++"));
        assert!(found.contains("Node.Js"));
    }

    #[test]
    fn test_multi_word_entry_matches_across_line_wrap() {
        let v = vocab(&["machine learning"]);
        let found = v.detect("built machine\nlearning pipelines", MatchMode::Substring);
        assert!(found.contains("Machine Learning"));
    }

    #[test]
    fn test_duplicate_occurrences_collapse() {
        let v = vocab(&["python"]);
        let found = v.detect("python python python", MatchMode::Substring);
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_scenario_resume_and_job_sets() {
        let v = SkillVocabulary::builtin().unwrap();

        let resume = v.detect(
            "Experienced Python developer with AWS and Docker skills",
            MatchMode::Substring,
        );
        let expected: BTreeSet<String> = ["Aws", "Docker", "Python"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(resume, expected);

        let job = v.detect(
            "Looking for Python, SQL, and AWS experience",
            MatchMode::Substring,
        );
        let expected: BTreeSet<String> = ["Aws", "Python", "Sql"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(job, expected);
    }

    #[test]
    fn test_title_case_normal_form() {
        assert_eq!(title_case("aws"), "Aws");
        assert_eq!(title_case("node.js"), "Node.Js");
        assert_eq!(title_case("machine learning"), "Machine Learning");
        assert_eq!(title_case("c++"), "C++");
        assert_eq!(title_case("c#"), "C#");
        assert_eq!(title_case("JAVASCRIPT"), "Javascript");
    }

    #[test]
    fn test_vocabulary_entries_normalized_on_construction() {
        let v = vocab(&["  Python ", "", "AWS"]);
        assert_eq!(v.entries(), &["python".to_string(), "aws".to_string()]);
    }

    #[test]
    fn test_builtin_vocabulary_loads() {
        let v = SkillVocabulary::builtin().unwrap();
        assert!(!v.is_empty());
        assert!(v.entries().contains(&"python".to_string()));
        assert!(v.entries().contains(&"communication".to_string()));
    }
}
