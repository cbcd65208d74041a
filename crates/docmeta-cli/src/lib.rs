//! docmeta CLI library.
//!
//! Runs the extraction and metadata pipeline over local files and formats
//! the result for the terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
