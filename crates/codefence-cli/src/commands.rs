//! Command implementations

use std::io::Read;
use std::path::Path;

use codefence::{Config, Extraction, Extractor, normalize_line_endings};
use colored::Colorize;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};

/// Read the document, load configuration, and run the pipeline.
fn run_pipeline(input: &InputArgs) -> Result<Extraction> {
    let mut config = match &input.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if input.phantom_filter {
        config.phantom.enabled = true;
    }

    let document = read_document(&input.file)?;
    let normalized = normalize_line_endings(&document);
    tracing::debug!(file = %input.file.display(), bytes = normalized.len(), "Extracting blocks");

    Ok(Extractor::new(config).extract(&normalized)?)
}

fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    Ok(Config::parse(&content)?)
}

fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(|e| CliError::read(path, e))
}

/// Run the extract command
pub fn run_extract(input: &InputArgs, json: bool) -> Result<()> {
    let extraction = run_pipeline(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&extraction)?);
        return Ok(());
    }

    if extraction.blocks.is_empty() {
        println!("{}", "No fenced code blocks".dimmed());
    }
    for block in &extraction.blocks {
        let language = block.language.as_deref().unwrap_or("-");
        let state = if block.is_closed {
            "closed".green()
        } else {
            "unclosed".yellow()
        };
        println!(
            "{:>5}-{:<5} {} {}x{} {} level {}",
            block.start_line,
            block.end_line,
            format!("{language:<12}").cyan(),
            block.fence_kind,
            block.fence_length,
            state,
            block.nesting_level
        );
    }
    for warning in &extraction.warnings {
        eprintln!("{}: {}", "warning".yellow().bold(), warning);
    }

    Ok(())
}

/// Run the check command
pub fn run_check(input: &InputArgs) -> Result<()> {
    let extraction = run_pipeline(input)?;

    if extraction.warnings.is_empty() {
        println!(
            "{} {} block(s), no warnings",
            "ok".green().bold(),
            extraction.blocks.len()
        );
        return Ok(());
    }

    for warning in &extraction.warnings {
        println!("{}: {}", "warning".yellow().bold(), warning);
    }
    Err(CliError::Findings {
        count: extraction.warnings.len(),
    })
}
