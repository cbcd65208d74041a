//! docmeta CLI - Extract text and metadata from documents on disk.

use clap::Parser;
use docmeta_cli::commands;
use docmeta_cli::config::OutputFormat;
use docmeta_cli::{Cli, Command, Config, Formatter};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    let errors = Formatter::new(OutputFormat::Table, !cli.no_color);

    if let Err(e) = run(cli) {
        eprintln!("{}", errors.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> docmeta_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Flags override saved settings
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Metadata(args) => commands::execute_metadata(args, &formatter)?,
        Command::Text(args) => commands::execute_text(args, &formatter)?,
    }

    Ok(())
}
