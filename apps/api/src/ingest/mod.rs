//! Text extraction from uploaded resume PDFs.
//!
//! The extracted text feeds the AI structuring step upstream; this module only
//! checks the upload really is a PDF and pulls out its text and page count.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("Only PDF files are allowed")]
    NotPdf,

    #[error("Failed to parse PDF: {0}")]
    Extraction(String),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPdf {
    pub text: String,
    pub num_pages: usize,
}

/// Extracts the text layer and page count from PDF bytes.
///
/// CPU-bound: async callers should run it inside `spawn_blocking`.
pub fn extract_resume_text(bytes: &[u8]) -> Result<ParsedPdf, IngestError> {
    if bytes.is_empty() {
        return Err(IngestError::Empty);
    }
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(IngestError::NotPdf);
    }

    let document =
        lopdf::Document::load_mem(bytes).map_err(|e| IngestError::Extraction(e.to_string()))?;
    let num_pages = document.get_pages().len();
    debug!(num_pages, "Loaded uploaded PDF");

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| IngestError::Extraction(e.to_string()))?;
    let text = text.trim().to_string();

    info!(num_pages, chars = text.len(), "Extracted text from uploaded PDF");
    Ok(ParsedPdf { text, num_pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_upload() {
        assert!(matches!(extract_resume_text(&[]), Err(IngestError::Empty)));
    }

    #[test]
    fn test_rejects_non_pdf() {
        let err = extract_resume_text(b"PK\x03\x04 not a pdf").unwrap_err();
        assert!(matches!(err, IngestError::NotPdf));
        assert_eq!(err.to_string(), "Only PDF files are allowed");
    }

    #[test]
    fn test_truncated_pdf_is_extraction_error() {
        let err = extract_resume_text(b"%PDF-1.7\n garbage").unwrap_err();
        assert!(matches!(err, IngestError::Extraction(_)));
    }
}
