//! JavaScript minifier: ordered comment/whitespace stripping passes.
//!
//! Layers:
//! 1. Comments: strip `//` line and `/* */` block comments
//! 2. Literals: swap string literals for `__STRING_<n>__` placeholders and back
//! 3. Whitespace: collapse runs, trim around punctuation
//! 4. Rename: shorten configured identifiers (opt-in)
//!
//! The [`lexer`] folds layers 1 and 2 into one state-machine scan that
//! understands escapes, template literals and regex literals.

pub mod layer1_comments;
pub mod layer2_literals;
pub mod layer3_whitespace;
pub mod layer4_rename;
pub mod lexer;
pub mod pipeline;

pub use jm_core::Strategy;
pub use layer2_literals::PlaceholderTable;
pub use layer4_rename::Renamer;
pub use pipeline::{minify, minify_textual, MinifierPipeline, MinifyResult};
