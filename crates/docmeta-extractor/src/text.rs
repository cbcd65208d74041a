//! Plain-text decoding

use crate::error::ExtractorError;

/// Decode raw bytes as UTF-8, verbatim
pub(crate) fn extract_text(file_name: &str, content: &[u8]) -> Result<String, ExtractorError> {
    String::from_utf8(content.to_vec()).map_err(|source| ExtractorError::Decode {
        file_name: file_name.to_string(),
        source,
    })
}
