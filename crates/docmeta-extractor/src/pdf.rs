//! PDF text extraction

use crate::error::ExtractorError;
use docmeta_domain::DocumentFormat;
use lopdf::Document;
use tracing::{debug, warn};

/// Extract the text of every page, in page order, with no separator
///
/// Only an unloadable document is an error. A page whose text cannot be
/// decoded is logged and contributes nothing.
pub(crate) fn extract_pdf(file_name: &str, content: &[u8]) -> Result<String, ExtractorError> {
    let doc = Document::load_mem(content)
        .map_err(|e| ExtractorError::parse(DocumentFormat::Pdf, file_name, e))?;

    let pages = doc.get_pages();
    debug!(file_name, pages = pages.len(), "Loaded PDF");

    let mut text = String::new();
    // get_pages is keyed by page number, so iteration is in page order
    for page_number in pages.keys() {
        match doc.extract_text(&[*page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => warn!(file_name, page = *page_number, error = %e, "Skipping unreadable PDF page"),
        }
    }

    Ok(text)
}
