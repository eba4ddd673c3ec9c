//! Line-ending normalization
//!
//! The scanner expects `\n` line terminators. Callers holding text from
//! arbitrary sources run it through [`normalize_line_endings`] first.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// `\r\n` or a lone `\r`
static LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("Invalid line ending regex"));

/// Convert `\r\n` and lone `\r` terminators to `\n`.
///
/// Borrows the input when it already uses `\n` only.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    LINE_ENDING.replace_all(text, "\n")
}
