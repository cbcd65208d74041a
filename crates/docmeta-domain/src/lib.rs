//! docmeta Domain Layer
//!
//! Value types and pure logic shared by every docmeta front end.
//! Nothing in this crate touches the filesystem or the network.
//!
//! ## Key Concepts
//!
//! - **UploadedFile**: a display name plus raw bytes, alive for one request
//! - **DocumentFormat**: the formats recognised by extension sniffing
//! - **MetadataRecord**: the fixed four-field summary of a document
//! - **Summary**: whitespace tokenization and frequency counting that
//!   produce a [`MetadataRecord`] from extracted text

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod export;
pub mod file;
pub mod format;
pub mod metadata;
pub mod summary;

// Re-exports for convenience
pub use export::{ExportError, CSV_CONTENT_TYPE, CSV_FILE_NAME};
pub use file::UploadedFile;
pub use format::DocumentFormat;
pub use metadata::MetadataRecord;
pub use summary::{keyword_frequencies, summarize, tokenize, PREVIEW_WORDS, TOP_KEYWORDS, UNTITLED};
