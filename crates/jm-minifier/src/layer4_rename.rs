//! Layer 4: Rename — shorten configured identifiers in code.
//!
//! Runs while literals are still placeholders, so string contents are never
//! touched. Matches whole words only, longest name first, in a single pass:
//! a rename's output is never renamed again.

use std::collections::BTreeMap;

use regex::{Captures, Regex};

use crate::layer2_literals::PLACEHOLDER_PREFIX;

/// Compiled rename map.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    re: Option<Regex>,
    map: BTreeMap<String, String>,
}

impl Renamer {
    /// Empty names and names that look like literal placeholders are ignored.
    pub fn new(renames: &BTreeMap<String, String>) -> Result<Self, regex::Error> {
        let map: BTreeMap<String, String> = renames
            .iter()
            .filter(|(from, _)| !from.is_empty() && !from.starts_with(PLACEHOLDER_PREFIX))
            .map(|(from, to)| (from.clone(), to.clone()))
            .collect();
        if map.is_empty() {
            return Ok(Self::default());
        }

        // Sort by length descending so `this.gameState` wins over `gameState`
        let mut names: Vec<&str> = map.keys().map(String::as_str).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()));
        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&format!(r"\b(?:{alternation})\b"))?;
        Ok(Self { re: Some(re), map })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn apply(&self, code: &str) -> String {
        let Some(re) = &self.re else {
            return code.to_string();
        };
        re.replace_all(code, |caps: &Captures| {
            let name = &caps[0];
            self.map.get(name).cloned().unwrap_or_else(|| name.to_string())
        })
        .into_owned()
    }
}

/// Apply a rename map to code in one go.
pub fn compress_with_map(code: &str, renames: &BTreeMap<String, String>) -> String {
    if code.is_empty() || renames.is_empty() {
        return code.to_string();
    }
    match Renamer::new(renames) {
        Ok(renamer) => renamer.apply(code),
        Err(e) => {
            tracing::warn!(error = %e, "rename map rejected, leaving code unchanged");
            code.to_string()
        }
    }
}
