//! Extraction configuration
//!
//! Configuration is plain TOML. Every key is optional:
//!
//! ```toml
//! [scanner]
//! lowercase_language = true
//!
//! [phantom]
//! enabled = false
//! max_content_chars = 10
//! max_gap_lines = 0
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_true() -> bool {
    true
}

fn default_max_content_chars() -> usize {
    10
}

/// Scanner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Lower-case the language tag taken from the info string
    #[serde(default = "default_true")]
    pub lowercase_language: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            lowercase_language: default_true(),
        }
    }
}

/// Thresholds for the phantom-block filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhantomConfig {
    /// Run the filter as part of the pipeline. Off unless asked for, so the
    /// pipeline returns every block the scanner finds by default.
    #[serde(default)]
    pub enabled: bool,

    /// A block is "short" when it has fewer non-whitespace content
    /// characters than this
    #[serde(default = "default_max_content_chars")]
    pub max_content_chars: usize,

    /// Two blocks are adjacent when at most this many lines separate the
    /// end of one from the start of the next
    #[serde(default)]
    pub max_gap_lines: usize,
}

impl Default for PhantomConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_content_chars: default_max_content_chars(),
            max_gap_lines: 0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub phantom: PhantomConfig,
}

impl Config {
    /// Parse and validate a configuration from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use codefence::Config;
    ///
    /// let config = Config::parse(r#"
    /// [phantom]
    /// max_content_chars = 4
    /// "#).unwrap();
    ///
    /// assert_eq!(config.phantom.max_content_chars, 4);
    /// assert!(!config.phantom.enabled);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the TOML is malformed or a threshold is
    /// out of range.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds for values that would make the filter meaningless.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `phantom.max_content_chars` is 0.
    pub fn validate(&self) -> Result<()> {
        if self.phantom.max_content_chars == 0 {
            return Err(Error::config(
                "phantom.max_content_chars must be greater than 0",
            ));
        }
        Ok(())
    }
}
