use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("{} not found!", path.display())]
    InputNotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MinifyError>;
