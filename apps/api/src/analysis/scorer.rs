//! Set-based match scoring between resume skills and job-description skills.

use std::collections::BTreeSet;

use serde::Serialize;

/// Outcome of comparing resume skills against job skills. The sets are
/// ordered, so iteration and serialization are lexicographic and stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub match_percentage: f64,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
}

/// Scores `resume_skills` against `job_skills`. Pure function of its inputs.
///
/// The percentage is 100 * |matched| / |job|, rounded to one decimal place
/// (half away from zero). An empty job set scores 0.0.
pub fn score_match(
    resume_skills: &BTreeSet<String>,
    job_skills: &BTreeSet<String>,
) -> MatchResult {
    let matched: BTreeSet<String> = resume_skills.intersection(job_skills).cloned().collect();
    let missing: BTreeSet<String> = job_skills.difference(resume_skills).cloned().collect();

    let match_percentage = if job_skills.is_empty() {
        0.0
    } else {
        round_one_decimal(matched.len() as f64 / job_skills.len() as f64 * 100.0)
    };

    MatchResult {
        match_percentage,
        matched_skills: matched,
        missing_skills: missing,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
