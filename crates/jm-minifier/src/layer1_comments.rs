//! Layer 1: Comments — textual removal of line and block comments.
//!
//! Purely pattern based: a `//` inside a string or regex literal is taken as a
//! comment start. [`crate::lexer`] does not have that problem.

use regex::Regex;
use std::sync::LazyLock;

static RE_LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap());
static RE_BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Drop everything from `//` up to (not including) the end of each line.
pub fn strip_line_comments(text: &str) -> String {
    RE_LINE_COMMENT.replace_all(text, "").into_owned()
}

/// Drop each `/* ... */`, shortest match, spanning lines. An unclosed `/*` is left alone.
pub fn strip_block_comments(text: &str) -> String {
    RE_BLOCK_COMMENT.replace_all(text, "").into_owned()
}

/// Both comment passes, line comments first.
pub fn compress(text: &str) -> String {
    if text.is_empty() { return String::new(); }
    strip_block_comments(&strip_line_comments(text))
}
