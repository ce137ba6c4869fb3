//! The analysis pipeline: raw PDF bytes to a match report.
//!
//! Data flows strictly forward (bytes -> text -> skill sets -> comparison ->
//! recommendations) and no stage holds state across requests.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::analysis::extractor::extract_pdf_text;
use crate::analysis::recommend::RecommendationTable;
use crate::analysis::scorer::score_match;
use crate::analysis::vocabulary::{MatchMode, SkillVocabulary};
use crate::errors::AppError;

/// Full report returned by the analyze endpoint. List fields are in
/// lexicographic order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Stateless analysis engine held in `AppState`. Bundles the vocabulary,
/// match mode, and recommendation table for the lifetime of the process.
pub struct Analyzer {
    vocabulary: SkillVocabulary,
    table: RecommendationTable,
    mode: MatchMode,
}

impl Analyzer {
    pub fn new(vocabulary: SkillVocabulary, table: RecommendationTable, mode: MatchMode) -> Self {
        Self {
            vocabulary,
            table,
            mode,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Extracts the resume text from PDF bytes, then scores it against the
    /// job description. Extraction failures surface without a partial result.
    pub fn analyze_pdf(
        &self,
        pdf_bytes: &[u8],
        job_description: &str,
    ) -> Result<AnalysisReport, AppError> {
        let resume_text = extract_pdf_text(pdf_bytes)?;
        Ok(self.analyze_text(&resume_text, job_description))
    }

    /// Pure text-to-report pipeline: detect both skill sets, score, attach
    /// recommendations for the gaps.
    pub fn analyze_text(&self, resume_text: &str, job_description: &str) -> AnalysisReport {
        let resume_skills = self.vocabulary.detect(resume_text, self.mode);
        let job_skills = self.vocabulary.detect(job_description, self.mode);

        let result = score_match(&resume_skills, &job_skills);
        let recommendations = self.table.recommendations_for(&result.missing_skills);

        AnalysisReport {
            match_percentage: result.match_percentage,
            matched_skills: ordered(result.matched_skills),
            missing_skills: ordered(result.missing_skills),
            recommendations,
        }
    }
}

fn ordered(set: BTreeSet<String>) -> Vec<String> {
    set.into_iter().collect()
}
