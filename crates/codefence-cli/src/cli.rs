//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// codefence - Extract fenced code blocks from Markdown documents
#[derive(Parser, Debug)]
#[command(name = "codefence")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a document
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InputArgs {
    /// Markdown file to read, or "-" for stdin
    pub file: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Drop short adjacent blocks that look like phantom detections
    #[arg(long)]
    pub phantom_filter: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the fenced code blocks in a document
    ///
    /// Examples:
    ///   codefence extract README.md
    ///   codefence extract --json README.md
    ///   cat notes.md | codefence extract -
    Extract {
        #[command(flatten)]
        input: InputArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Report suspicious, overlapping, or unclosed blocks
    ///
    /// Exits with a non-zero status when any warning is found.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract_json() {
        let cli = Cli::parse_from(["codefence", "extract", "--json", "README.md"]);
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Extract {
                input: InputArgs {
                    file: PathBuf::from("README.md"),
                    config: None,
                    phantom_filter: false,
                },
                json: true,
            }
        );
    }

    #[test]
    fn test_parse_check_with_config() {
        let cli = Cli::parse_from([
            "codefence",
            "-v",
            "check",
            "--config",
            "fence.toml",
            "--phantom-filter",
            "doc.md",
        ]);
        assert!(cli.verbose);
        let Commands::Check { input } = cli.command else {
            panic!("expected check command");
        };
        assert_eq!(input.config, Some(PathBuf::from("fence.toml")));
        assert!(input.phantom_filter);
    }
}
