//! Metadata command implementation.

use super::load_upload;
use crate::cli::MetadataArgs;
use crate::error::Result;
use crate::output::Formatter;
use docmeta_extractor::{process, Outcome};
use std::fs;

/// Execute the metadata command.
pub fn execute_metadata(args: MetadataArgs, formatter: &Formatter) -> Result<()> {
    let file = load_upload(&args.file)?;
    let outcome = process(&file)?;
    println!("{}", render_outcome(&outcome, &args, formatter)?);
    Ok(())
}

/// Render an outcome, writing the CSV file when one was requested.
fn render_outcome(outcome: &Outcome, args: &MetadataArgs, formatter: &Formatter) -> Result<String> {
    let Outcome::Metadata(record) = outcome else {
        // Empty and unsupported uploads always carry a message
        return Ok(formatter.warning(outcome.message().unwrap_or_default()));
    };

    let mut output = formatter.format_record(record)?;
    if let Some(path) = &args.csv {
        fs::write(path, record.to_csv()?)?;
        output.push('\n');
        output.push_str(&formatter.success(&format!("Metadata written to {}", path.display())));
    }
    Ok(output)
}
