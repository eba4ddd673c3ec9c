//! Block nesting resolver
//!
//! Computes a containment tree over arbitrary line-ranged candidates. The
//! resolver is independent of the scanner: scanner output is always flat, but
//! any candidate set whose ranges are either disjoint or strictly nested can
//! be resolved here.
//!
//! Range A contains range B when A starts strictly before and ends strictly
//! after B. Any two ranges that share a line without one containing the other
//! make the whole set invalid.

use serde::{Deserialize, Serialize};

use crate::block::ExtractedBlock;
use crate::error::{Error, Result};
use crate::lines::validate_range;
use crate::marker::FenceKind;

/// A line range to place in the containment tree.
///
/// The payload fields are carried through resolution unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCandidate {
    /// 1-based first line
    pub start_line: usize,
    /// 1-based last line, inclusive
    pub end_line: usize,
    pub language: Option<String>,
    pub fence_kind: FenceKind,
    pub fence_length: usize,
}

impl BlockCandidate {
    /// Candidate spanning `start_line..=end_line` with a default payload.
    pub fn new(start_line: usize, end_line: usize) -> Self {
        Self {
            start_line,
            end_line,
            language: None,
            fence_kind: FenceKind::Backtick,
            fence_length: 3,
        }
    }

    /// Strict containment: starts before and ends after `other`.
    pub const fn contains(&self, other: &Self) -> bool {
        self.start_line < other.start_line && self.end_line > other.end_line
    }

    /// Whether the two ranges share at least one line.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.start_line <= other.end_line && other.start_line <= self.end_line
    }
}

impl From<&ExtractedBlock> for BlockCandidate {
    fn from(block: &ExtractedBlock) -> Self {
        Self {
            start_line: block.start_line,
            end_line: block.end_line,
            language: block.language.clone(),
            fence_kind: block.fence_kind,
            fence_length: block.fence_length,
        }
    }
}

/// A candidate placed in the containment tree.
///
/// `parent` is an index into the resolved list returned alongside this
/// value, never an owning link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedCandidate {
    pub candidate: BlockCandidate,
    pub nesting_level: usize,
    pub parent: Option<usize>,
    /// Position of the candidate in the resolver's input
    pub source_index: usize,
}

/// Resolve nesting levels and parent links.
///
/// The output is ordered by start line ascending, then end line descending,
/// so every parent precedes its children.
///
/// # Example
///
/// ```
/// use codefence::nesting::{BlockCandidate, resolve};
///
/// let resolved = resolve(vec![
///     BlockCandidate::new(3, 5),
///     BlockCandidate::new(1, 10),
/// ]).unwrap();
///
/// assert_eq!(resolved[0].nesting_level, 0);
/// assert_eq!(resolved[1].nesting_level, 1);
/// assert_eq!(resolved[1].parent, Some(0));
/// assert_eq!(resolved[1].source_index, 0);
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidNesting`] for the first pair of candidates that
/// overlap without one containing the other, and a line-number error for any
/// candidate with an invalid range.
pub fn resolve(candidates: Vec<BlockCandidate>) -> Result<Vec<ResolvedCandidate>> {
    for candidate in &candidates {
        validate_range(candidate.start_line, candidate.end_line)?;
    }

    let mut ordered: Vec<(usize, BlockCandidate)> = candidates.into_iter().enumerate().collect();
    ordered.sort_by(|(_, a), (_, b)| {
        a.start_line
            .cmp(&b.start_line)
            .then(b.end_line.cmp(&a.end_line))
    });

    let mut resolved: Vec<ResolvedCandidate> = Vec::with_capacity(ordered.len());
    // Indices into `resolved`; each entry contains the one above it.
    let mut stack: Vec<usize> = Vec::new();

    for (source_index, candidate) in ordered {
        while let Some(&top) = stack.last() {
            if resolved[top].candidate.end_line < candidate.start_line {
                stack.pop();
            } else {
                break;
            }
        }

        for &open in &stack {
            let ancestor = &resolved[open].candidate;
            if ancestor.overlaps(&candidate) && !ancestor.contains(&candidate) {
                return Err(Error::InvalidNesting {
                    outer_start: ancestor.start_line,
                    outer_end: ancestor.end_line,
                    inner_start: candidate.start_line,
                    inner_end: candidate.end_line,
                });
            }
        }

        let (nesting_level, parent) = match stack.last() {
            Some(&top) if resolved[top].candidate.contains(&candidate) => {
                (resolved[top].nesting_level + 1, Some(top))
            }
            _ => (0, None),
        };

        tracing::trace!(
            start_line = candidate.start_line,
            end_line = candidate.end_line,
            nesting_level,
            "Resolved candidate"
        );

        stack.push(resolved.len());
        resolved.push(ResolvedCandidate {
            candidate,
            nesting_level,
            parent,
            source_index,
        });
    }

    Ok(resolved)
}

/// Resolve a block list and write each block's nesting level back.
///
/// # Errors
///
/// Propagates [`resolve`] errors; the blocks are left untouched on failure.
pub fn assign_levels(blocks: &mut [ExtractedBlock]) -> Result<()> {
    let candidates = blocks.iter().map(BlockCandidate::from).collect();
    for resolved in resolve(candidates)? {
        blocks[resolved.source_index].nesting_level = resolved.nesting_level;
    }
    Ok(())
}
