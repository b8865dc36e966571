use crate::error::Result;
use crate::types::Strategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "web/script.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifierConfig {
    pub input: PathBuf,
    /// Falls back to the `.min.js` sibling of `input` when unset.
    pub output: Option<PathBuf>,
    pub strategy: Strategy,
    /// Identifier renames applied to code, never to string contents.
    pub renames: BTreeMap<String, String>,
}

impl MinifierConfig {
    /// Load a JSON config file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&raw)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| min_path_for(&self.input))
    }
}

impl Default for MinifierConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            strategy: Strategy::default(),
            renames: BTreeMap::new(),
        }
    }
}

/// `web/script.js` -> `web/script.min.js`. Extensionless names get `.min.js` appended.
pub fn min_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}.min.{}", ext.to_string_lossy()),
        None => format!("{stem}.min.js"),
    };
    input.with_file_name(name)
}
