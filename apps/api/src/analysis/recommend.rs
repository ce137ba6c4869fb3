//! Canned learning recommendations for missing skills.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};

const DEFAULT_TABLE: &str = include_str!("../../config/recommendations.json");
const FALLBACK_ADVICE: &str = "Research and learn through online tutorials";

/// Static table mapping a title-cased skill name to learning advice.
/// Immutable for the lifetime of the process.
pub struct RecommendationTable {
    entries: BTreeMap<String, String>,
}

impl RecommendationTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// The table compiled into the binary from `config/recommendations.json`.
    pub fn builtin() -> Result<Self> {
        Self::from_json(DEFAULT_TABLE)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)
            .context("recommendation table must be a JSON object of skill to advice")?;
        Ok(Self::new(entries))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read recommendations file {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats one "<skill>: <advice>" line per missing skill, in the set's
    /// lexicographic order. Skills absent from the table get generic advice
    /// naming the skill.
    pub fn recommendations_for(&self, missing_skills: &BTreeSet<String>) -> Vec<String> {
        missing_skills
            .iter()
            .map(|skill| {
                let advice = self
                    .entries
                    .get(skill)
                    .map(String::as_str)
                    .unwrap_or(FALLBACK_ADVICE);
                format!("{skill}: {advice}")
            })
            .collect()
    }
}
