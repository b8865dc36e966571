pub mod config;
pub mod error;
pub mod report;
pub mod types;

pub use config::{min_path_for, MinifierConfig};
pub use error::{MinifyError, Result};
pub use report::{group_thousands, SizeReport};
pub use types::Strategy;
