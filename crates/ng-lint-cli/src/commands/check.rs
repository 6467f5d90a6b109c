//! Check command implementation.

use anyhow::Result;
use ng_lint_core::SourceDocument;
use std::path::{Path, PathBuf};

use crate::config::LoadedConfig;
use crate::OutputFormat;

/// Runs the check command over the explicitly listed files.
pub fn run(files: &[PathBuf], format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let loaded = LoadedConfig::load(config)?;
    let linter = loaded.build_linter()?;

    tracing::info!("Analyzing {} files", files.len());

    let (docs, skipped) = load_documents(files);
    let result = linter.check_documents(&docs);

    super::output::print(&result, format)?;

    if result.has_errors() || skipped > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads and parses the listed files.
///
/// A file that cannot be read or parsed is warned about and skipped; the
/// remaining files still get checked. Returns the documents plus the number
/// of files skipped.
fn load_documents(files: &[PathBuf]) -> (Vec<SourceDocument>, usize) {
    let mut docs = Vec::with_capacity(files.len());
    let mut skipped = 0usize;

    for path in files {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!("Skipping {}: {err}", path.display());
                skipped += 1;
                continue;
            }
        };

        match SourceDocument::parse(path, &text) {
            Ok(doc) => docs.push(doc),
            Err(err) => {
                tracing::warn!("Skipping {}: {err}", path.display());
                skipped += 1;
            }
        }
    }

    (docs, skipped)
}
