//! CSV export of a metadata record
//!
//! One header row followed by one data row, quoting only the fields that
//! need it.

use crate::metadata::MetadataRecord;
use thiserror::Error;

/// File name offered for downloads
pub const CSV_FILE_NAME: &str = "metadata.csv";

/// Content type of the exported CSV
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

/// Errors that can occur while exporting a record
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writer produced bytes that are not UTF-8
    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl MetadataRecord {
    /// Serialize as a single-row CSV document with a header row
    ///
    /// # Examples
    ///
    /// ```
    /// use docmeta_domain::summarize;
    ///
    /// let csv = summarize("Hello world hello").to_csv().unwrap();
    /// assert_eq!(
    ///     csv,
    ///     "Title,Top Keywords,Word Count,Preview\nHello,\"Hello, world, hello\",3,Hello world hello\n"
    /// );
    /// ```
    pub fn to_csv(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(self)?;
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}
