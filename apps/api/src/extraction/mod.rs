//! Resume text extraction: PDF bytes to one flat, normalized string.
//!
//! Partial-result policy: a page that fails to extract is logged and skipped.
//! Only a document that neither backend can open is an error.

pub mod pdf;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use pdf::extract_pages;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document could not be parsed as PDF: {0}")]
    Unreadable(String),
}

/// Collapses every whitespace run (newlines included) to one space after
/// mapping tabs and non-breaking spaces to spaces.
pub fn normalize_text(raw: &str) -> String {
    raw.replace(&['\t', '\u{a0}'][..], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts and normalizes text from in-memory PDF bytes.
pub fn extract_text_from_mem(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = extract_pages(bytes)?;
    Ok(normalize_text(&pages.join("\n")))
}

/// Extracts and normalizes text from a PDF on disk.
pub fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    extract_text_from_mem(&bytes)
}
