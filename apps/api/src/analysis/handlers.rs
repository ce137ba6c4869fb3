//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;

use crate::analysis::pipeline::AnalysisReport;
use crate::analysis::vocabulary::title_case;
use crate::auth::extract::CurrentUser;
use crate::errors::AppError;
use crate::state::AppState;

/// Fields pulled out of the multipart form before validation.
#[derive(Default)]
struct AnalyzeForm {
    filename: Option<String>,
    resume: Option<Bytes>,
    job_description: Option<String>,
}

/// POST /api/v1/analyze
///
/// Multipart form: a `resume` PDF file and a `job_description` text field.
/// Validation failures reject the request before the pipeline runs.
pub async fn handle_analyze(
    State(state): State<AppState>,
    current: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("resume") => {
                form.filename = field.file_name().map(ToString::to_string);
                form.resume = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read resume upload: {e}"))
                })?);
            }
            Some("job_description") => {
                form.job_description = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("could not read job description: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let resume = form
        .resume
        .ok_or_else(|| AppError::Validation("no resume file uploaded".to_string()))?;
    validate_upload(
        form.filename.as_deref(),
        resume.len(),
        state.config.max_upload_bytes,
    )?;

    let job_description = match form.job_description.as_deref().map(str::trim) {
        Some(jd) if !jd.is_empty() => jd.to_string(),
        _ => {
            return Err(AppError::Validation(
                "job description cannot be empty".to_string(),
            ))
        }
    };

    tracing::info!(
        username = %current.user.username,
        resume_bytes = resume.len(),
        "analyzing resume"
    );

    let report = state.analyzer.analyze_pdf(&resume, &job_description)?;
    Ok(Json(report))
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<SkillEntry>,
}

#[derive(Debug, Serialize)]
pub struct SkillEntry {
    /// Canonical lower-case keyword as configured.
    pub keyword: String,
    /// Title-cased form the analyzer reports matches in.
    pub display: String,
}

/// GET /api/v1/skills
///
/// The fixed vocabulary the detector recognizes, in configured order.
pub async fn handle_list_skills(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> Json<SkillListResponse> {
    let skills = state
        .analyzer
        .vocabulary()
        .entries()
        .iter()
        .map(|keyword| SkillEntry {
            keyword: keyword.clone(),
            display: title_case(keyword),
        })
        .collect();
    Json(SkillListResponse { skills })
}

/// Upload checks that run before the pipeline: the form must carry a file
/// with a non-empty name, a .pdf extension, and a size within the limit.
fn validate_upload(filename: Option<&str>, len: usize, max_bytes: usize) -> Result<(), AppError> {
    let filename = filename.unwrap_or("").trim();
    if filename.is_empty() {
        return Err(AppError::Validation("no resume file selected".to_string()));
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("please upload a PDF file".to_string()));
    }
    if len > max_bytes {
        return Err(AppError::Validation(format!(
            "resume file exceeds the {} MiB limit",
            max_bytes / (1024 * 1024)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 16 * 1024 * 1024;

    #[test]
    fn test_missing_filename_rejected() {
        assert!(validate_upload(None, 100, MAX).is_err());
    }

    #[test]
    fn test_empty_filename_rejected() {
        assert!(validate_upload(Some(""), 100, MAX).is_err());
        assert!(validate_upload(Some("   "), 100, MAX).is_err());
    }

    #[test]
    fn test_non_pdf_extension_rejected() {
        let err = validate_upload(Some("resume.docx"), 100, MAX).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_pdf_extension_is_case_insensitive() {
        assert!(validate_upload(Some("resume.PDF"), 100, MAX).is_ok());
        assert!(validate_upload(Some("resume.pdf"), 100, MAX).is_ok());
    }

    #[test]
    fn test_oversized_upload_rejected() {
        let err = validate_upload(Some("resume.pdf"), MAX + 1, MAX).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_upload_at_limit_accepted() {
        assert!(validate_upload(Some("resume.pdf"), MAX, MAX).is_ok());
    }
}
