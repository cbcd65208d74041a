//! Error types for the Extractor

use docmeta_domain::DocumentFormat;
use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Plain-text upload is not valid UTF-8
    #[error("Could not decode {file_name} as UTF-8: {source}")]
    Decode {
        /// Name of the uploaded file
        file_name: String,
        /// Underlying decode failure
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Document bytes could not be parsed in the declared format
    #[error("Could not parse {file_name} as {format}: {message}")]
    Parse {
        /// Format the file was sniffed as
        format: DocumentFormat,
        /// Name of the uploaded file
        file_name: String,
        /// Parser error message
        message: String,
    },
}

impl ExtractorError {
    pub(crate) fn parse(format: DocumentFormat, file_name: &str, err: impl std::fmt::Display) -> Self {
        ExtractorError::Parse {
            format,
            file_name: file_name.to_string(),
            message: err.to_string(),
        }
    }
}
