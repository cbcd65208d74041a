//! Format dispatch

use crate::docx::extract_docx;
use crate::error::ExtractorError;
use crate::pdf::extract_pdf;
use crate::text::extract_text;
use docmeta_domain::{DocumentFormat, UploadedFile};
use tracing::{debug, warn};

/// Result of running the extractor over one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Plain text of the document, possibly empty
    Extracted(String),
    /// The extension is not one of the supported formats
    Unsupported {
        /// Lowercased extension that was sniffed
        extension: String,
    },
}

impl Extraction {
    /// User-facing message for an unsupported upload
    pub const UNSUPPORTED_MESSAGE: &'static str = "Unsupported format.";

    /// Extracted text, if the format was supported
    pub fn text(&self) -> Option<&str> {
        match self {
            Extraction::Extracted(text) => Some(text),
            Extraction::Unsupported { .. } => None,
        }
    }
}

/// Extract the plain text of an uploaded file
///
/// The format is chosen from the file name's extension, ignoring case.
/// Empty content in a supported format yields empty text without invoking
/// a parser.
///
/// # Errors
///
/// - [`ExtractorError::Decode`] when a `.txt` file is not valid UTF-8
/// - [`ExtractorError::Parse`] when PDF or DOCX bytes are malformed
pub fn extract(file: &UploadedFile) -> Result<Extraction, ExtractorError> {
    let Some(format) = file.format() else {
        let extension = file.extension();
        debug!(file_name = %file.name, %extension, "Unsupported extension");
        return Ok(Extraction::Unsupported { extension });
    };

    if file.is_empty() {
        debug!(file_name = %file.name, %format, "Empty upload");
        return Ok(Extraction::Extracted(String::new()));
    }

    let result = match format {
        DocumentFormat::Pdf => extract_pdf(&file.name, &file.content),
        DocumentFormat::Docx => extract_docx(&file.name, &file.content),
        DocumentFormat::Text => extract_text(&file.name, &file.content),
    };

    match result {
        Ok(text) => {
            debug!(
                file_name = %file.name,
                %format,
                bytes = file.content.len(),
                chars = text.chars().count(),
                "Extracted text"
            );
            Ok(Extraction::Extracted(text))
        }
        Err(e) => {
            warn!(file_name = %file.name, %format, error = %e, "Extraction failed");
            Err(e)
        }
    }
}
