//! Resume upload handling: PDF detection and text extraction.

pub mod pdf;

pub use pdf::{extract_pdf_text, is_pdf};
