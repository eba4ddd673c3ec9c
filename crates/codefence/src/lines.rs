//! Line numbering and offset helpers
//!
//! Internally every component works with 0-based line indices. Everything
//! exposed to callers uses 1-based line numbers. The conversion lives here
//! so that no other module does `+ 1` / `- 1` arithmetic by hand.

use crate::error::{Error, Result};

/// Convert a 0-based internal line index to a 1-based external line number.
pub const fn to_external(internal: usize) -> usize {
    internal + 1
}

/// Convert a 1-based external line number to a 0-based internal index.
///
/// # Errors
///
/// Returns [`Error::InvalidLineNumber`] when `external` is 0.
pub fn from_external(external: usize) -> Result<usize> {
    external
        .checked_sub(1)
        .ok_or(Error::InvalidLineNumber { line: external })
}

/// Validate an inclusive range of external line numbers.
///
/// # Errors
///
/// Returns [`Error::InvalidLineNumber`] when either endpoint is 0 and
/// [`Error::InvalidLineRange`] when `end < start`.
pub fn validate_range(start: usize, end: usize) -> Result<()> {
    from_external(start)?;
    from_external(end)?;
    if end < start {
        return Err(Error::InvalidLineRange { start, end });
    }
    Ok(())
}

/// One line of a normalized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 0-based line index
    pub index: usize,
    /// Byte offset of the first byte of the line
    pub offset: usize,
    /// Line text without its `\n` terminator
    pub text: &'a str,
}

impl SourceLine<'_> {
    /// Byte offset just past the last byte of the line text.
    pub const fn end_offset(&self) -> usize {
        self.offset + self.text.len()
    }

    /// 1-based line number.
    pub const fn number(&self) -> usize {
        to_external(self.index)
    }
}

/// Split a document into lines, recording the byte offset of each.
///
/// Lines are separated by `\n`. A trailing `\n` terminates the last line
/// rather than starting an empty one, so `"a\n"` has one line and `""` has
/// none.
pub fn split_lines(document: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;

    for (index, text) in document.split('\n').enumerate() {
        lines.push(SourceLine {
            index,
            offset,
            text,
        });
        offset += text.len() + 1;
    }

    if document.is_empty() || document.ends_with('\n') {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_external_adds_one() {
        assert_eq!(to_external(0), 1);
        assert_eq!(to_external(41), 42);
    }

    #[test]
    fn test_from_external_rejects_zero() {
        assert_eq!(from_external(0), Err(Error::InvalidLineNumber { line: 0 }));
        assert_eq!(from_external(1), Ok(0));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(1, 1).is_ok());
        assert!(validate_range(3, 7).is_ok());
        assert_eq!(
            validate_range(5, 4),
            Err(Error::InvalidLineRange { start: 5, end: 4 })
        );
        assert_eq!(
            validate_range(0, 4),
            Err(Error::InvalidLineNumber { line: 0 })
        );
    }

    #[test]
    fn test_split_lines_offsets() {
        let lines = split_lines("ab\n\ncde");
        assert_eq!(lines.len(), 3);
        assert_eq!((lines[0].offset, lines[0].text), (0, "ab"));
        assert_eq!((lines[1].offset, lines[1].text), (3, ""));
        assert_eq!((lines[2].offset, lines[2].text), (4, "cde"));
        assert_eq!(lines[2].end_offset(), 7);
        assert_eq!(lines[2].number(), 3);
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\n").len(), 1);
        assert_eq!(split_lines("a\n\n").len(), 2);
        assert_eq!(split_lines("\n").len(), 1);
    }
}
