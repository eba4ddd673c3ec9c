//! Fence marker recognition
//!
//! A fence marker is a line made of a run of three or more backticks or
//! tildes, optionally indented and optionally followed by an info string:
//!
//! ```text
//!   ```rust ignore
//! ~~~~
//! ```
//!
//! Whether a marker opens or closes a block depends on scanner state; this
//! module only classifies the line itself.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lines::SourceLine;

/// Minimum number of marker characters in a fence run.
pub const MIN_FENCE_LENGTH: usize = 3;

/// Indentation, marker run, and trailing text of a fence line.
static FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ \t]*)(`{3,}|~{3,})(.*)$").expect("Invalid fence marker regex")
});

/// The two interchangeable fence delimiter families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FenceKind {
    /// `` ``` ``
    Backtick,
    /// `~~~`
    Tilde,
}

impl FenceKind {
    /// The delimiter character for this family.
    pub const fn as_char(self) -> char {
        match self {
            Self::Backtick => '`',
            Self::Tilde => '~',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '`' => Some(Self::Backtick),
            '~' => Some(Self::Tilde),
            _ => None,
        }
    }
}

impl fmt::Display for FenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backtick => write!(f, "backtick"),
            Self::Tilde => write!(f, "tilde"),
        }
    }
}

/// A fence marker recognized on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceMarker {
    /// Delimiter family
    pub kind: FenceKind,
    /// Number of consecutive delimiter characters (at least 3)
    pub length: usize,
    /// Width of the leading indentation in bytes
    pub indent: usize,
    /// Trimmed text after the run, `None` when only whitespace follows
    pub info: Option<String>,
    /// 0-based index of the line the marker was found on
    pub line_index: usize,
}

impl FenceMarker {
    /// Recognize a fence marker on `line`.
    ///
    /// Returns `None` for anything that is not a fence, including backtick
    /// runs whose trailing text contains another backtick (inline code such
    /// as ```` ```a``` ````).
    pub fn parse(line: &SourceLine<'_>) -> Option<Self> {
        let caps = FENCE_REGEX.captures(line.text)?;
        let indent = caps.get(1).map_or(0, |m| m.len());
        let run = caps.get(2)?.as_str();
        let trailing = caps.get(3).map_or("", |m| m.as_str()).trim();

        let kind = FenceKind::from_char(run.chars().next()?)?;
        if kind == FenceKind::Backtick && trailing.contains('`') {
            return None;
        }

        Some(Self {
            kind,
            length: run.len(),
            indent,
            info: (!trailing.is_empty()).then(|| trailing.to_string()),
            line_index: line.index,
        })
    }

    /// True when the marker carries an info string.
    pub const fn is_opening(&self) -> bool {
        self.info.is_some()
    }

    /// True when nothing but whitespace follows the run.
    pub const fn is_closing(&self) -> bool {
        self.info.is_none()
    }

    /// First whitespace-delimited token of the info string.
    pub fn language(&self) -> Option<&str> {
        self.info.as_deref()?.split_whitespace().next()
    }

    /// Whether this marker closes a block opened with `kind` and `length`.
    pub fn closes(&self, kind: FenceKind, length: usize) -> bool {
        self.is_closing() && self.kind == kind && self.length >= length
    }
}
