//! Error types for codefence

/// Result type for codefence operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in codefence operations
///
/// Malformed documents never produce an error: the scanner always returns a
/// best-effort block list. These variants cover contract violations by the
/// caller and invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid line number {line}: external line numbers start at 1")]
    InvalidLineNumber { line: usize },

    #[error("Invalid line range {start}..={end}: end precedes start")]
    InvalidLineRange { start: usize, end: usize },

    #[error(
        "Invalid nesting: lines {outer_start}..={outer_end} overlap lines {inner_start}..={inner_end} without containing them"
    )]
    InvalidNesting {
        outer_start: usize,
        outer_end: usize,
        inner_start: usize,
        inner_end: usize,
    },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
