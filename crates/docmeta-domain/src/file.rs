//! Uploaded file module

use crate::format::DocumentFormat;

/// A single uploaded document
///
/// Owned by whoever handles the request and dropped once the metadata
/// record has been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Display name, used only for extension sniffing
    pub name: String,
    /// Raw byte content
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Create a new uploaded file
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Lowercased text after the last `.` in the name
    ///
    /// A name without any dot yields the whole lowercased name.
    ///
    /// # Examples
    ///
    /// ```
    /// use docmeta_domain::UploadedFile;
    ///
    /// assert_eq!(UploadedFile::new("report.final.PDF", vec![]).extension(), "pdf");
    /// assert_eq!(UploadedFile::new("README", vec![]).extension(), "readme");
    /// ```
    pub fn extension(&self) -> String {
        extension_of(&self.name)
    }

    /// Format detected from the name, if supported
    pub fn format(&self) -> Option<DocumentFormat> {
        DocumentFormat::sniff(&self.name)
    }

    /// Whether the content is zero bytes long
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

pub(crate) fn extension_of(name: &str) -> String {
    // rsplit always yields at least one item
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}
