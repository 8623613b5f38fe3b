use lopdf::Document;
use tracing::{debug, warn};

use crate::extraction::ExtractionError;

/// Extracts raw text per page, in page order.
///
/// Pages are read independently through `lopdf`; a failing page is skipped.
/// When `lopdf` cannot open the document at all, whole-document extraction
/// through `pdf-extract` is tried before giving up.
pub fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("lopdf could not load document ({e}), falling back to pdf-extract");
            return extract_whole_document(bytes).map(|text| vec![text]);
        }
    };

    let pages = doc.get_pages();
    let mut texts = Vec::with_capacity(pages.len());

    for page_num in pages.keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(text) if !text.is_empty() => texts.push(text),
            Ok(_) => debug!("Page {page_num} has no extractable text"),
            Err(e) => warn!("Failed to read page {page_num}: {e}"),
        }
    }

    debug!(
        "Extracted {} of {} pages",
        texts.len(),
        pages.len()
    );
    Ok(texts)
}

fn extract_whole_document(bytes: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Unreadable(e.to_string()))
}


#[cfg(test)]
mod tests {
    use super::testing::pdf_with_pages;
    use super::*;

    #[test]
    fn test_extracts_each_page_in_order() {
        let bytes = pdf_with_pages(&["Skills Rust", "Experience Acme"]);
        let pages = extract_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("Skills Rust"));
        assert!(pages[1].contains("Experience Acme"));
    }

    #[test]
    fn test_extracted_text_is_normalized() {
        let bytes = pdf_with_pages(&["Jane Doe", "Projects"]);
        let text = crate::extraction::extract_text_from_mem(&bytes).unwrap();
        assert_eq!(text, "Jane Doe Projects");
    }

    #[test]
    fn test_blank_page_normalizes_to_empty_text() {
        let bytes = pdf_with_pages(&[""]);
        let text = crate::extraction::extract_text_from_mem(&bytes).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_garbage_bytes_are_unreadable() {
        let result = extract_pages(b"%NOT-A-PDF");
        assert!(matches!(result, Err(ExtractionError::Unreadable(_))));
    }

    #[test]
    fn test_empty_bytes_are_unreadable() {
        assert!(extract_pages(&[]).is_err());
    }
}
