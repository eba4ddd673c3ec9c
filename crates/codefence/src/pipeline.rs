//! End-to-end extraction
//!
//! Runs the scanner, the optional phantom filter, and the nesting resolver
//! in sequence and returns blocks annotated with their nesting level.
//!
//! The phantom filter only runs when `phantom.enabled` is set. With the
//! default configuration the pipeline keeps every block the scanner finds
//! and reports suspicious pairs as warnings instead.

use serde::{Deserialize, Serialize};

use crate::block::ExtractedBlock;
use crate::config::Config;
use crate::error::Result;
use crate::nesting::assign_levels;
use crate::phantom::{PhantomFilter, SequenceWarning};
use crate::scanner::Scanner;

/// Result of running the full pipeline over one document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Blocks ordered by start line
    pub blocks: Vec<ExtractedBlock>,
    /// Diagnostics for the final block list
    pub warnings: Vec<SequenceWarning>,
}

/// Configured extraction pipeline
#[derive(Debug, Clone)]
pub struct Extractor {
    scanner: Scanner,
    phantom: PhantomFilter,
    filter_enabled: bool,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Extractor {
    /// Build a pipeline from configuration
    pub fn new(config: Config) -> Self {
        Self {
            scanner: Scanner::new(config.scanner),
            filter_enabled: config.phantom.enabled,
            phantom: PhantomFilter::new(config.phantom),
        }
    }

    /// Extract, filter, and resolve the blocks of `document`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidNesting`] if the block list handed to
    /// the resolver contains partially overlapping ranges. Scanner output
    /// never does.
    pub fn extract(&self, document: &str) -> Result<Extraction> {
        let mut blocks = self.scanner.extract(document);
        let scanned = blocks.len();

        if self.filter_enabled {
            blocks = self.phantom.filter(blocks);
            if blocks.len() < scanned {
                tracing::debug!(
                    removed = scanned - blocks.len(),
                    "Phantom filter removed blocks"
                );
            }
        }

        assign_levels(&mut blocks)?;
        let warnings = self.phantom.validate_sequence(&blocks);

        tracing::debug!(
            blocks = blocks.len(),
            warnings = warnings.len(),
            "Extraction complete"
        );

        Ok(Extraction { blocks, warnings })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pipeline_levels_are_flat() {
        let extraction = Extractor::default()
            .extract("```a\nx\n```\n\n~~~b\ny\n~~~\n")
            .unwrap();
        assert_eq!(extraction.blocks.len(), 2);
        assert!(extraction.blocks.iter().all(|b| b.nesting_level == 0));
        assert!(extraction.warnings.is_empty());
    }

    #[test]
    fn test_filter_is_opt_in() {
        let doc = "```\na\n```\n```\nb\n```";
        let unfiltered = Extractor::default().extract(doc).unwrap();
        assert_eq!(unfiltered.blocks.len(), 2);
        assert_eq!(unfiltered.warnings.len(), 1);

        let mut config = Config::default();
        config.phantom.enabled = true;
        let filtered = Extractor::new(config).extract(doc).unwrap();
        assert_eq!(filtered.blocks.len(), 1);
        assert!(filtered.warnings.is_empty());
    }
}
