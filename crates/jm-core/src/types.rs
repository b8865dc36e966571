use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How comments and literals are located before whitespace is collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Single-pass state machine. Understands escapes, templates and regex literals.
    #[default]
    Lexical,
    /// Regex substitution passes. Truncates `//` inside strings, kept for compatibility.
    Textual,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Textual => "textual",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexical" => Ok(Self::Lexical),
            "textual" => Ok(Self::Textual),
            other => Err(format!("unknown strategy '{other}' (expected lexical or textual)")),
        }
    }
}
