//! Command implementations.

pub mod metadata;
pub mod text;

pub use self::metadata::execute_metadata;
pub use self::text::execute_text;

use crate::error::{CliError, Result};
use docmeta_domain::UploadedFile;
use std::fs;
use std::path::Path;

/// Read a document from disk, keeping only its file name for sniffing.
pub fn load_upload(path: &Path) -> Result<UploadedFile> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CliError::InvalidInput(format!("'{}' is not a file path", path.display()))
        })?;
    let content = fs::read(path)?;
    Ok(UploadedFile::new(name, content))
}
