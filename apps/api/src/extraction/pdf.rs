//! PDF Text Extractor — turns an uploaded PDF into plain text for ranking.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use tracing::warn;

use crate::errors::AppError;
use crate::models::document::Document;

/// Extracts the text of every page of an in-memory PDF, pages concatenated in order.
///
/// `pdf-extract` panics on some malformed inputs, so the call is isolated with
/// `catch_unwind` and both failure modes surface as `UnprocessableEntity`.
pub fn extract_pdf_text(name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF extraction failed for {name}: {e}");
            Err(AppError::UnprocessableEntity(format!(
                "Could not extract text from '{name}'"
            )))
        }
        Err(_) => {
            warn!("PDF extraction panicked for {name}");
            Err(AppError::UnprocessableEntity(format!(
                "Could not extract text from '{name}'"
            )))
        }
    }
}

/// Converts uploaded resume files into ranking documents, preserving upload order.
/// CPU-bound; run inside `spawn_blocking`.
pub fn extract_documents(files: Vec<(String, Bytes)>) -> Result<Vec<Document>, AppError> {
    files
        .into_iter()
        .map(|(name, bytes)| {
            let text = extract_pdf_text(&name, &bytes)?;
            Ok(Document::new(name, text))
        })
        .collect()
}
