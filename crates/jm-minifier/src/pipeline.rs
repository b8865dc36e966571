//! Minification pipeline — orchestrates the layers in their fixed order.

use std::collections::BTreeMap;

use crate::{layer1_comments, layer2_literals, layer3_whitespace, lexer};
use crate::layer2_literals::PlaceholderTable;
use crate::layer4_rename::Renamer;
use jm_core::{SizeReport, Strategy};

/// Minification result with statistics.
#[derive(Debug, Clone)]
pub struct MinifyResult {
    pub output: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub strategy: Strategy,
    pub passes_applied: Vec<String>,
    pub literals_protected: usize,
}

impl MinifyResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }

    pub fn report(&self) -> SizeReport {
        SizeReport::new(self.original_len, self.minified_len)
    }
}

/// The main minifier pipeline.
pub struct MinifierPipeline {
    pub strategy: Strategy,
    renamer: Renamer,
}

impl MinifierPipeline {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy, renamer: Renamer::default() }
    }

    /// Rename identifiers in code after whitespace compression. A map the
    /// regex engine rejects is logged and left out.
    pub fn with_renames(mut self, renames: &BTreeMap<String, String>) -> Self {
        match Renamer::new(renames) {
            Ok(renamer) => self.renamer = renamer,
            Err(e) => tracing::warn!(error = %e, "rename map rejected, renaming disabled"),
        }
        self
    }

    pub fn lexical() -> Self { Self::new(Strategy::Lexical) }
    pub fn textual() -> Self { Self::new(Strategy::Textual) }

    /// Minify JavaScript source. Total: never fails, same input gives same output.
    pub fn minify(&self, source: &str) -> MinifyResult {
        let original_len = source.len();
        let mut passes = Vec::new();

        // Comments out, literals swapped for placeholders
        let (mut result, table) = match self.strategy {
            Strategy::Lexical => {
                let tokens = lexer::tokenize(source);
                tracing::debug!(
                    comments = tokens.comments_removed,
                    literals = tokens.literals.len(),
                    "lexed source"
                );
                passes.push("lex".into());
                (tokens.code, tokens.literals)
            }
            Strategy::Textual => {
                let stripped = layer1_comments::strip_line_comments(source);
                passes.push("line_comments".into());
                let stripped = layer1_comments::strip_block_comments(&stripped);
                passes.push("block_comments".into());
                tracing::debug!(before = original_len, after = stripped.len(), "stripped comments");
                let (protected, table) = layer2_literals::protect(&stripped);
                passes.push("protect_literals".into());
                (protected, table)
            }
        };

        // Collapse, trim punctuation, collapse again
        result = layer3_whitespace::compress(&result);
        passes.push("whitespace".into());
        tracing::debug!(len = result.len(), "whitespace passes done");

        if !self.renamer.is_empty() {
            result = self.renamer.apply(&result);
            passes.push("rename".into());
            tracing::debug!(names = self.renamer.len(), len = result.len(), "renamed identifiers");
        }

        result = layer2_literals::restore(&result, &table);
        passes.push("restore_literals".into());
        let output = result.trim().to_string();
        passes.push("trim".into());

        tracing::debug!(
            strategy = %self.strategy,
            original = original_len,
            minified = output.len(),
            "minified"
        );

        MinifyResult {
            minified_len: output.len(),
            output,
            original_len,
            strategy: self.strategy,
            passes_applied: passes,
            literals_protected: table.len(),
        }
    }

    /// Literals the first stage of this strategy would protect.
    pub fn literals(&self, source: &str) -> PlaceholderTable {
        match self.strategy {
            Strategy::Lexical => lexer::tokenize(source).literals,
            Strategy::Textual => layer2_literals::protect(&layer1_comments::compress(source)).1,
        }
    }
}

impl Default for MinifierPipeline {
    fn default() -> Self {
        Self::new(Strategy::Lexical)
    }
}

/// `minify(source) -> text` with the lexical strategy.
pub fn minify(source: &str) -> String {
    MinifierPipeline::lexical().minify(source).output
}

/// The pattern-substitution pipeline, bugs included.
pub fn minify_textual(source: &str) -> String {
    MinifierPipeline::textual().minify(source).output
}
