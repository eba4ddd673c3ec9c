//! Phantom-block filter
//!
//! Ambiguous runs of short fences can be detected as several tiny blocks
//! sitting right next to each other. This pass drops the weaker block of any
//! such pair. It is a heuristic and strictly optional: the scanner's output is
//! valid without it.
//!
//! Two blocks form a suspicious pair when they
//! - are line-adjacent (at most `max_gap_lines` lines between them),
//! - use the same fence family, and
//! - both have fewer than `max_content_chars` non-whitespace content
//!   characters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::block::ExtractedBlock;
use crate::config::PhantomConfig;
use crate::marker::FenceKind;

/// Drop phantom blocks using the default thresholds.
pub fn filter(blocks: Vec<ExtractedBlock>) -> Vec<ExtractedBlock> {
    PhantomFilter::default().filter(blocks)
}

/// Report suspicious block pairs using the default thresholds.
pub fn validate_sequence(blocks: &[ExtractedBlock]) -> Vec<SequenceWarning> {
    PhantomFilter::default().validate_sequence(blocks)
}

/// A diagnostic about the shape of a block sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SequenceWarning {
    /// Two blocks share at least one line without one strictly containing
    /// the other
    Overlap {
        first: (usize, usize),
        second: (usize, usize),
    },
    /// Two short same-family blocks sit next to each other
    SuspiciousAdjacent {
        first: (usize, usize),
        second: (usize, usize),
        fence_kind: FenceKind,
    },
    /// A block runs to the end of the document without a closing fence
    Unclosed { start_line: usize, end_line: usize },
}

impl fmt::Display for SequenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlap { first, second } => write!(
                f,
                "blocks at lines {}-{} and {}-{} overlap",
                first.0, first.1, second.0, second.1
            ),
            Self::SuspiciousAdjacent {
                first,
                second,
                fence_kind,
            } => write!(
                f,
                "short {} blocks at lines {}-{} and {}-{} are adjacent; one may be a phantom",
                fence_kind, first.0, first.1, second.0, second.1
            ),
            Self::Unclosed {
                start_line,
                end_line,
            } => write!(
                f,
                "block starting at line {} is not closed before line {}",
                start_line, end_line
            ),
        }
    }
}

/// Heuristic filter for spuriously detected blocks
#[derive(Debug, Clone, Default)]
pub struct PhantomFilter {
    config: PhantomConfig,
}

impl PhantomFilter {
    /// Create a filter with the given thresholds
    pub fn new(config: PhantomConfig) -> Self {
        Self { config }
    }

    /// Sort blocks by start line and drop the weaker block of every
    /// suspicious pair.
    ///
    /// The block with more significant content survives; on a tie the earlier
    /// block survives. Survivors are re-checked against their new neighbour,
    /// so no suspicious pair remains in the output and filtering the output
    /// again changes nothing.
    pub fn filter(&self, mut blocks: Vec<ExtractedBlock>) -> Vec<ExtractedBlock> {
        blocks.sort_by_key(|block| block.start_line);

        let mut kept: Vec<ExtractedBlock> = Vec::with_capacity(blocks.len());
        for block in blocks {
            let mut keep = true;
            while let Some(top) = kept.last() {
                if !self.is_suspicious(top, &block) {
                    break;
                }
                if block.significant_chars() > top.significant_chars() {
                    tracing::debug!(
                        dropped = top.start_line,
                        kept = block.start_line,
                        "Dropping phantom block"
                    );
                    kept.pop();
                } else {
                    tracing::debug!(
                        dropped = block.start_line,
                        kept = top.start_line,
                        "Dropping phantom block"
                    );
                    keep = false;
                    break;
                }
            }
            if keep {
                kept.push(block);
            }
        }

        kept
    }

    /// Report overlapping, suspicious-adjacent, and unclosed blocks without
    /// changing anything.
    ///
    /// Every pair of blocks that shares a line is checked, not only sorted
    /// neighbours. A block strictly inside another is legal nesting and is
    /// not reported.
    pub fn validate_sequence(&self, blocks: &[ExtractedBlock]) -> Vec<SequenceWarning> {
        let mut sorted: Vec<&ExtractedBlock> = blocks.iter().collect();
        sorted.sort_by(|a, b| {
            a.start_line
                .cmp(&b.start_line)
                .then(b.end_line.cmp(&a.end_line))
        });

        let mut warnings = Vec::new();
        // Earlier blocks that still reach the current start line.
        let mut active: Vec<&ExtractedBlock> = Vec::new();
        let mut prev: Option<&ExtractedBlock> = None;

        for &next in &sorted {
            active.retain(|open| open.end_line >= next.start_line);
            for &open in &active {
                if !strictly_contains(open, next) {
                    warnings.push(SequenceWarning::Overlap {
                        first: open.line_span(),
                        second: next.line_span(),
                    });
                }
            }

            let suspicious = prev.filter(|prev| {
                next.start_line > prev.end_line && self.is_suspicious(prev, next)
            });
            if let Some(prev) = suspicious {
                warnings.push(SequenceWarning::SuspiciousAdjacent {
                    first: prev.line_span(),
                    second: next.line_span(),
                    fence_kind: prev.fence_kind,
                });
            }

            active.push(next);
            prev = Some(next);
        }

        warnings.extend(
            sorted
                .iter()
                .filter(|block| !block.is_closed)
                .map(|block| SequenceWarning::Unclosed {
                    start_line: block.start_line,
                    end_line: block.end_line,
                }),
        );

        warnings
    }

    fn is_suspicious(&self, prev: &ExtractedBlock, next: &ExtractedBlock) -> bool {
        let adjacent = next.start_line <= prev.end_line + 1 + self.config.max_gap_lines;
        adjacent
            && prev.fence_kind == next.fence_kind
            && prev.significant_chars() < self.config.max_content_chars
            && next.significant_chars() < self.config.max_content_chars
    }
}

fn strictly_contains(outer: &ExtractedBlock, inner: &ExtractedBlock) -> bool {
    outer.start_line < inner.start_line && outer.end_line > inner.end_line
}
