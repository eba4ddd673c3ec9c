//! Extracted code block types and queries

use serde::{Deserialize, Serialize};

use crate::marker::FenceKind;

/// A fenced code region extracted from a document.
///
/// `start_line` is the 1-based line of the opening fence. `end_line` is the
/// 1-based line of the closing fence, or the last line of the document when
/// the block was never closed. `start_offset..end_offset` is the byte span of
/// those lines, so `raw_content` always equals that slice of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedBlock {
    /// Lines strictly between the fences, joined with `\n`
    pub content: String,
    /// First token of the info string, lower-cased unless configured otherwise
    pub language: Option<String>,
    /// Full trimmed info string of the opening fence
    pub info: Option<String>,
    pub fence_kind: FenceKind,
    pub fence_length: usize,
    /// Indentation width of the opening fence
    pub indent: usize,
    pub start_line: usize,
    pub end_line: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    /// False when the document ended before a matching closing fence
    pub is_closed: bool,
    pub nesting_level: usize,
    /// The block including its fence lines
    pub raw_content: String,
}

impl ExtractedBlock {
    /// Inclusive 1-based line span owned by this block.
    pub const fn line_span(&self) -> (usize, usize) {
        (self.start_line, self.end_line)
    }

    /// Whether the 1-based `line` falls inside this block, fences included.
    pub const fn contains_line(&self, line: usize) -> bool {
        self.start_line <= line && line <= self.end_line
    }

    /// Number of lines between the fences.
    pub const fn content_line_count(&self) -> usize {
        let span = self.end_line.saturating_add(1).saturating_sub(self.start_line);
        if self.is_closed {
            span.saturating_sub(2)
        } else {
            span.saturating_sub(1)
        }
    }

    /// Number of non-whitespace characters in the content.
    pub fn significant_chars(&self) -> usize {
        self.content.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Find the block owning the 1-based `line`, if any.
pub fn block_at_line(blocks: &[ExtractedBlock], line: usize) -> Option<&ExtractedBlock> {
    blocks.iter().find(|block| block.contains_line(line))
}
