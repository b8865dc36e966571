use clap::Parser;
use jm_core::{MinifierConfig, Strategy};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "jsmin", version, about = "Strip comments and whitespace from a JavaScript file")]
pub struct Cli {
    /// Directory the input and output paths are relative to
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Script to minify [default: web/script.js]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Destination [default: <input>.min.js next to the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON config file with `input`, `output`, `strategy` and `renames` keys
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// `lexical` (default) or `textual`
    #[arg(short, long)]
    pub strategy: Option<Strategy>,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn resolve_config(&self) -> jm_core::Result<MinifierConfig> {
        let mut config = match &self.config {
            Some(path) => MinifierConfig::from_json_file(path)?,
            None => MinifierConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        Ok(config)
    }
}
