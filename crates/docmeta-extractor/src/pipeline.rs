//! Extract-then-summarize pipeline

use crate::error::ExtractorError;
use crate::extractor::{extract, Extraction};
use docmeta_domain::{summarize, MetadataRecord, UploadedFile};
use tracing::info;

/// What a single upload produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text was found and summarized
    Metadata(MetadataRecord),
    /// A supported format yielded no text
    Empty,
    /// The extension is not supported
    Unsupported {
        /// Lowercased extension that was sniffed
        extension: String,
    },
}

impl Outcome {
    /// User-facing message for an upload with no text
    pub const EMPTY_MESSAGE: &'static str = "Could not extract text.";

    /// Message to show when no record was produced
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::Metadata(_) => None,
            Outcome::Empty => Some(Self::EMPTY_MESSAGE),
            Outcome::Unsupported { .. } => Some(Extraction::UNSUPPORTED_MESSAGE),
        }
    }
}

/// Run the extractor and, when it yields text, the summarizer
///
/// Only non-empty extracted text reaches the summarizer; an unsupported
/// upload never produces a record.
pub fn process(file: &UploadedFile) -> Result<Outcome, ExtractorError> {
    let outcome = match extract(file)? {
        Extraction::Extracted(text) if text.is_empty() => Outcome::Empty,
        Extraction::Extracted(text) => Outcome::Metadata(summarize(&text)),
        Extraction::Unsupported { extension } => Outcome::Unsupported { extension },
    };

    match &outcome {
        Outcome::Metadata(record) => info!(
            file_name = %file.name,
            word_count = record.word_count,
            "Generated metadata"
        ),
        Outcome::Empty => info!(file_name = %file.name, "No text extracted"),
        Outcome::Unsupported { extension } => {
            info!(file_name = %file.name, %extension, "Unsupported format")
        }
    }

    Ok(outcome)
}
