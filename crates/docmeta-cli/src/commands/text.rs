//! Text command implementation.

use super::load_upload;
use crate::cli::TextArgs;
use crate::error::Result;
use crate::output::Formatter;
use docmeta_extractor::{extract, Extraction};

/// Execute the text command.
pub fn execute_text(args: TextArgs, formatter: &Formatter) -> Result<()> {
    let file = load_upload(&args.file)?;
    match extract(&file)? {
        Extraction::Extracted(text) => println!("{}", text),
        Extraction::Unsupported { extension } => {
            println!(
                "{}",
                formatter.warning(&format!("{} (.{})", Extraction::UNSUPPORTED_MESSAGE, extension))
            );
        }
    }
    Ok(())
}
