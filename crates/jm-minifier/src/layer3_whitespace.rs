//! Layer 3: Whitespace — collapse runs and strip spacing around punctuation.

use regex::Regex;
use std::sync::LazyLock;

/// Characters that never need surrounding whitespace.
pub const PUNCTUATION: &[char] = &[
    '{', '}', '(', ')', ';', ',', '=', '+', '-', '*', '/', '%',
    '<', '>', '!', '&', '|', '?', ':', '[', ']',
];

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static RE_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([{}();,=+\-*/%<>!&|?:\[\]])\s*").unwrap()
});

/// Every whitespace run (spaces, tabs, newlines) becomes one space.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").into_owned()
}

/// `a = ( b )` -> `a=(b)`.
pub fn trim_punctuation(text: &str) -> String {
    RE_PUNCT.replace_all(text, "${1}").into_owned()
}

/// Collapse, trim punctuation, collapse again. Order matters.
pub fn compress(text: &str) -> String {
    if text.is_empty() { return String::new(); }
    let result = collapse_whitespace(text);
    let result = trim_punctuation(&result);
    collapse_whitespace(&result)
}
