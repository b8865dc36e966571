//! Layer 2: Literals — protect quoted strings from the whitespace passes.

use regex::{Captures, Regex};
use std::sync::LazyLock;

pub const PLACEHOLDER_PREFIX: &str = "__STRING_";
pub const PLACEHOLDER_SUFFIX: &str = "__";

/// Opening quote, no quotes inside, closing quote of either kind.
static RE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["'][^"']*["']"#).unwrap());
static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__STRING_(\d+)__").unwrap());

/// Ordered literals captured during protection. Index `n` restores `__STRING_n__`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderTable {
    literals: Vec<String>,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a literal and return the placeholder that stands in for it.
    pub fn push(&mut self, literal: &str) -> String {
        let token = placeholder(self.literals.len());
        self.literals.push(literal.to_string());
        token
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.literals.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(String::as_str)
    }
}

pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}{PLACEHOLDER_SUFFIX}")
}

/// Replace quoted literals left to right with indexed placeholders.
pub fn protect(text: &str) -> (String, PlaceholderTable) {
    let mut table = PlaceholderTable::new();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in RE_QUOTED.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(&table.push(m.as_str()));
        last = m.end();
    }
    out.push_str(&text[last..]);
    (out, table)
}

/// Put literals back in one scan. Restored text is not rescanned; tokens
/// with no table entry stay as they are.
pub fn restore(text: &str, table: &PlaceholderTable) -> String {
    if table.is_empty() {
        return text.to_string();
    }
    RE_PLACEHOLDER
        .replace_all(text, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| table.get(i))
                .unwrap_or(&caps[0])
                .to_string()
        })
        .into_owned()
}
