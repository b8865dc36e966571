//! Read, minify, write, report.

use crate::cli::Cli;
use anyhow::{Context, Result};
use jm_core::{group_thousands, MinifyError, SizeReport};
use jm_minifier::MinifierPipeline;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Minified { input: PathBuf, output: PathBuf, report: SizeReport },
    /// Nothing was written.
    MissingInput(PathBuf),
}

/// Run one minification, writing the console report to `console`.
///
/// A missing input is reported and returned as [`Outcome::MissingInput`];
/// any other I/O or decoding failure is an error.
pub fn run(cli: &Cli, console: &mut impl Write) -> Result<Outcome> {
    let config = cli.resolve_config()?;
    let input = config.input.clone();
    let output = config.output_path();
    let input_abs = cli.root.join(&input);
    let output_abs = cli.root.join(&output);

    if !input_abs.exists() {
        tracing::warn!(path = %input_abs.display(), "input missing");
        writeln!(console, "Error: {}", MinifyError::InputNotFound { path: input.clone() })?;
        return Ok(Outcome::MissingInput(input));
    }

    writeln!(console, "Reading {}...", input.display())?;
    let original = std::fs::read_to_string(&input_abs)
        .with_context(|| format!("failed to read {}", input_abs.display()))?;

    writeln!(console, "Minifying...")?;
    let result = MinifierPipeline::new(config.strategy)
        .with_renames(&config.renames)
        .minify(&original);
    tracing::info!(
        strategy = %config.strategy,
        renames = config.renames.len(),
        literals = result.literals_protected,
        passes = ?result.passes_applied,
        "minified {}",
        input.display()
    );

    std::fs::write(&output_abs, &result.output)
        .with_context(|| format!("failed to write {}", output_abs.display()))?;

    let report = result.report();
    console.write_all(render_report(&output, &report).as_bytes())?;

    Ok(Outcome::Minified { input, output, report })
}

/// The success block printed after the output file is written.
pub fn render_report(output: &Path, report: &SizeReport) -> String {
    let file_name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.display().to_string());
    format!(
        "\n[OK] Minified script written to: {}\n  \
         Original size: {} bytes\n  \
         Minified size: {} bytes\n  \
         Reduction: {:.1}%\n\
         \n[!] Don't forget to update index.html to use {}!\n",
        output.display(),
        group_thousands(report.original_bytes),
        group_thousands(report.minified_bytes),
        report.reduction_pct(),
        file_name,
    )
}
