//! docmeta Extractor
//!
//! Converts uploaded documents into plain text and runs the metadata
//! pipeline over the result.
//!
//! # Architecture
//!
//! ```text
//! UploadedFile → extract → Extraction ─┬─ Extracted(text) → summarize → Outcome::Metadata
//!                                      │                  (empty)     → Outcome::Empty
//!                                      └─ Unsupported                 → Outcome::Unsupported
//! ```
//!
//! # Supported Formats
//!
//! - **PDF**: page text concatenated in page order, no separator
//! - **DOCX**: body paragraphs joined with newlines, empty ones included
//! - **TXT**: strict UTF-8 decode
//!
//! Any other extension yields [`Extraction::Unsupported`], which is a normal
//! value, not an error. Malformed input yields a typed [`ExtractorError`]
//! the caller can show to the user.
//!
//! # Example Usage
//!
//! ```
//! use docmeta_domain::UploadedFile;
//! use docmeta_extractor::{process, Outcome};
//!
//! let file = UploadedFile::new("notes.txt", b"Hello world hello".to_vec());
//! match process(&file).unwrap() {
//!     Outcome::Metadata(record) => assert_eq!(record.word_count, 3),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```

#![warn(missing_docs)]

mod docx;
mod error;
mod extractor;
mod pdf;
mod pipeline;
mod text;

pub use error::ExtractorError;
pub use extractor::{extract, Extraction};
pub use pipeline::{process, Outcome};
