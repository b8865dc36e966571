//! `jsmin`: minify `web/script.js` into `web/script.min.js` and report the savings.

pub mod cli;
pub mod driver;
pub mod logs;

pub use cli::Cli;
pub use driver::{render_report, run, Outcome};
pub use logs::init_tracing;
