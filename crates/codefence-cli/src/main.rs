//! codefence CLI
//!
//! Reads a Markdown document and lists or checks its fenced code blocks.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Extract { input, json } => commands::run_extract(&input, json),
        Commands::Check { input } => commands::run_check(&input),
    }
}
