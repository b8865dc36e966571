//! Size statistics for a minification run.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeReport {
    pub original_bytes: usize,
    pub minified_bytes: usize,
}

impl SizeReport {
    pub fn new(original_bytes: usize, minified_bytes: usize) -> Self {
        Self { original_bytes, minified_bytes }
    }

    pub fn from_texts(original: &str, minified: &str) -> Self {
        Self::new(original.len(), minified.len())
    }

    /// `(1 - minified/original) * 100`. An empty original reports 0.0.
    pub fn reduction_pct(&self) -> f64 {
        if self.original_bytes == 0 { return 0.0; }
        (1.0 - self.minified_bytes as f64 / self.original_bytes as f64) * 100.0
    }

    /// Negative when the output grew.
    pub fn saved_bytes(&self) -> i64 {
        self.original_bytes as i64 - self.minified_bytes as i64
    }
}

/// Render an integer with `,` every three digits: `1234567` -> `1,234,567`.
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
