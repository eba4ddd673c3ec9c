//! Fence scanner
//!
//! Walks a document line by line and extracts fenced code blocks into a
//! flat, ordered list. At most one block is open at a time: while a block is
//! open, every line that does not close it is content, including lines that
//! look like fences of either family. A tilde block that contains a complete
//! backtick block therefore yields a single tilde block whose content holds
//! the backtick fences verbatim.
//!
//! The scanner never fails. A fence left open at the end of the document
//! produces a block with `is_closed == false` that runs to the last line.

use crate::block::ExtractedBlock;
use crate::config::ScannerConfig;
use crate::lines::{SourceLine, split_lines, to_external};
use crate::marker::FenceMarker;

/// Extract all fenced code blocks using the default scanner settings.
///
/// # Example
///
/// ```
/// use codefence::scanner::extract;
///
/// let blocks = extract("Intro\n```Rust\nfn main() {}\n```\n");
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].language.as_deref(), Some("rust"));
/// assert_eq!(blocks[0].content, "fn main() {}");
/// assert_eq!((blocks[0].start_line, blocks[0].end_line), (2, 4));
/// ```
pub fn extract(document: &str) -> Vec<ExtractedBlock> {
    Scanner::default().extract(document)
}

/// A block whose opening fence has been seen but whose end is not yet known.
#[derive(Debug)]
struct OpenBlock {
    marker: FenceMarker,
    language: Option<String>,
}

#[derive(Debug)]
enum ScanState {
    Idle,
    Open(OpenBlock),
}

/// Line-oriented fence scanner
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Scanner {
    /// Create a scanner with the given settings
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Extract all fenced code blocks, ordered by start line.
    pub fn extract(&self, document: &str) -> Vec<ExtractedBlock> {
        let lines = split_lines(document);
        let mut blocks = Vec::new();
        let mut state = ScanState::Idle;

        for line in &lines {
            state = match state {
                ScanState::Idle => match FenceMarker::parse(line) {
                    Some(marker) => ScanState::Open(self.open(marker)),
                    None => ScanState::Idle,
                },
                ScanState::Open(open) => {
                    let closes = FenceMarker::parse(line)
                        .is_some_and(|m| m.closes(open.marker.kind, open.marker.length));
                    if closes {
                        blocks.push(finalize(document, &lines, open, line.index, true));
                        ScanState::Idle
                    } else {
                        ScanState::Open(open)
                    }
                }
            };
        }

        if let (ScanState::Open(open), Some(last)) = (state, lines.last()) {
            tracing::warn!(
                start_line = to_external(open.marker.line_index),
                "Fenced block is never closed; extending it to the end of the document"
            );
            blocks.push(finalize(document, &lines, open, last.index, false));
        }

        blocks
    }

    fn open(&self, marker: FenceMarker) -> OpenBlock {
        let language = marker.language().map(|lang| {
            if self.config.lowercase_language {
                lang.to_lowercase()
            } else {
                lang.to_string()
            }
        });
        tracing::debug!(
            line = to_external(marker.line_index),
            kind = %marker.kind,
            length = marker.length,
            language = language.as_deref().unwrap_or(""),
            "Opening fenced block"
        );
        OpenBlock { marker, language }
    }
}

/// Freeze an open block ending at the 0-based line `end`.
///
/// For a closed block `end` is the closing fence line and is excluded from
/// the content; for an unclosed block it is the last document line and is
/// included.
fn finalize(
    document: &str,
    lines: &[SourceLine<'_>],
    open: OpenBlock,
    end: usize,
    is_closed: bool,
) -> ExtractedBlock {
    let start = open.marker.line_index;
    let content_end = if is_closed { end } else { end + 1 };
    let content = lines[start + 1..content_end]
        .iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n");

    let start_offset = lines[start].offset;
    let end_offset = lines[end].end_offset();

    tracing::debug!(
        start_line = to_external(start),
        end_line = to_external(end),
        is_closed,
        "Finalized fenced block"
    );

    ExtractedBlock {
        content,
        language: open.language,
        info: open.marker.info,
        fence_kind: open.marker.kind,
        fence_length: open.marker.length,
        indent: open.marker.indent,
        start_line: to_external(start),
        end_line: to_external(end),
        start_offset,
        end_offset,
        is_closed,
        nesting_level: 0,
        raw_content: document[start_offset..end_offset].to_string(),
    }
}
