//! PDF text extraction wrapper around the `pdf-extract` crate.
//!
//! Extraction never fails the request: a broken, encrypted or scanned PDF
//! yields [`EXTRACTION_PLACEHOLDER`] and a warning for the caller to surface.

use bytes::Bytes;
use tracing::{info, warn};

/// Text analyzed in place of the resume when extraction fails.
pub const EXTRACTION_PLACEHOLDER: &str = "Could not extract text from the PDF file.";

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Result of extracting a resume upload.
#[derive(Debug, Clone)]
pub struct ExtractedResume {
    pub text: String,
    /// Set when extraction failed and `text` is the placeholder.
    pub warning: Option<String>,
}

impl ExtractedResume {
    fn placeholder(reason: String) -> Self {
        Self {
            text: EXTRACTION_PLACEHOLDER.to_string(),
            warning: Some(format!("Error extracting text from PDF: {reason}")),
        }
    }
}

/// Extracts plain text from an in-memory PDF on a blocking thread.
///
/// Parser errors and parser panics both degrade to the placeholder text.
pub async fn extract_pdf_text(bytes: Bytes) -> ExtractedResume {
    let size = bytes.len();
    let result =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match result {
        Ok(Ok(text)) if text.trim().is_empty() => {
            warn!("PDF has no extractable text ({size} bytes)");
            ExtractedResume::placeholder("the PDF contains no extractable text".to_string())
        }
        Ok(Ok(text)) => {
            info!("Extracted {} chars from {} byte PDF", text.len(), size);
            ExtractedResume {
                text,
                warning: None,
            }
        }
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            ExtractedResume::placeholder(e.to_string())
        }
        Err(join_err) => {
            warn!("PDF extraction aborted: {join_err}");
            ExtractedResume::placeholder("the PDF parser aborted".to_string())
        }
    }
}

/// Returns true if the upload's content type or leading bytes identify a PDF.
/// - Content-Type: application/pdf (case-insensitive, substring match)
/// - Magic bytes: %PDF-
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(PDF_MAGIC)
}
