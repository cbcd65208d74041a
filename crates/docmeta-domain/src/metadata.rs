//! Metadata record module

use serde::{Deserialize, Serialize};

/// Fixed four-field summary of a document's text
///
/// Serializes with the external keys `Title`, `Top Keywords`, `Word Count`
/// and `Preview`, always in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// First token of the text, or `"N/A"` for empty text
    #[serde(rename = "Title")]
    pub title: String,

    /// Up to five most frequent tokens joined with `", "`
    #[serde(rename = "Top Keywords")]
    pub top_keywords: String,

    /// Number of whitespace-delimited tokens
    #[serde(rename = "Word Count")]
    pub word_count: usize,

    /// Up to the first forty tokens joined with single spaces
    #[serde(rename = "Preview")]
    pub preview: String,
}

impl MetadataRecord {
    /// External field names, in display order
    pub const KEYS: [&'static str; 4] = ["Title", "Top Keywords", "Word Count", "Preview"];

    /// `(key, value)` pairs in display order
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            (Self::KEYS[0], self.title.clone()),
            (Self::KEYS[1], self.top_keywords.clone()),
            (Self::KEYS[2], self.word_count.to_string()),
            (Self::KEYS[3], self.preview.clone()),
        ]
    }
}
