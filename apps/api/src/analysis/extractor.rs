//! PDF text extraction. Pages are appended in order with no separator
//! guarantee; a page with no extractable text contributes an empty string
//! without raising an error.

use std::io::Write;

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::errors::AppError;

/// Extracts the concatenated text of every page in the PDF byte stream.
///
/// The bytes are staged in a named temp file that is removed when the handle
/// drops, on success and error paths alike. Fails with `Extraction` if the
/// bytes are not a parseable PDF container.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut staged = NamedTempFile::new().context("could not stage uploaded file")?;
    staged
        .write_all(bytes)
        .context("could not write uploaded file")?;
    staged.flush().context("could not write uploaded file")?;

    pdf_extract::extract_text(staged.path())
        .map_err(|e| AppError::Extraction(format!("could not read PDF: {e}")))
}
