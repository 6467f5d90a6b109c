//! Rule requiring files to start with a configured license banner.

use std::path::{Path, PathBuf};

use ng_lint_core::{Rule, Severity, SourceDocument, Suggestion, TextEdit, Violation};
use tracing::debug;

/// Rule code for require-license-banner.
pub const CODE: &str = "NG005";

/// Rule name for require-license-banner.
pub const NAME: &str = "require-license-banner";

/// Configuration failure while building [`RequireLicenseBanner`].
///
/// These are fatal: a banner rule with no banner text or a broken file
/// pattern cannot produce meaningful results, so construction fails instead
/// of silently passing every file.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    /// The banner file could not be read.
    #[error("Failed to read banner file {path}")]
    Io {
        /// Resolved banner file path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}'")]
    Pattern {
        /// The offending pattern text.
        pattern: String,
        /// Underlying glob error.
        #[source]
        source: glob::PatternError,
    },
}

/// Checks that matched files start with the banner text.
///
/// The banner is read once at construction, normalized to LF line endings,
/// and shared read-only across all checked files. File contents are
/// normalized the same way before the comparison, so checked-out line
/// endings do not affect the result.
#[derive(Debug, Clone)]
pub struct RequireLicenseBanner {
    banner_file: PathBuf,
    banner: String,
    pattern: Option<glob::Pattern>,
}

impl RequireLicenseBanner {
    /// Builds the rule from its configuration.
    ///
    /// `banner_file` is resolved against `base_dir` (the configuration
    /// file's directory). An absent `file_pattern` matches every analyzed
    /// file.
    pub fn new(
        base_dir: &Path,
        banner_file: impl Into<PathBuf>,
        file_pattern: Option<&str>,
    ) -> Result<Self, BannerError> {
        let banner_file = banner_file.into();
        let resolved = base_dir.join(&banner_file);
        let raw = std::fs::read_to_string(&resolved).map_err(|source| BannerError::Io {
            path: resolved.clone(),
            source,
        })?;
        let banner = normalize_newlines(&raw);

        let pattern = file_pattern
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| BannerError::Pattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()?;

        debug!(
            "Loaded license banner from {} ({} bytes)",
            resolved.display(),
            banner.len()
        );

        Ok(Self {
            banner_file,
            banner,
            pattern,
        })
    }

    /// The normalized banner text.
    #[must_use]
    pub fn banner(&self) -> &str {
        &self.banner
    }

    fn applies_to(&self, path: &Path) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.matches_path(path),
            None => true,
        }
    }
}

impl Rule for RequireLicenseBanner {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires matched files to start with the license banner"
    }

    fn check(&self, doc: &SourceDocument) -> Vec<Violation> {
        if !self.applies_to(doc.path()) {
            return Vec::new();
        }
        if normalize_newlines(doc.text()).starts_with(&self.banner) {
            return Vec::new();
        }

        let edit = TextEdit::insert_at_start(doc.path().to_path_buf(), self.banner.clone());
        vec![Violation::new(
            CODE,
            NAME,
            Severity::Error,
            doc.location_at_file_start(),
            format!(
                "File must start with the license banner (copy the text from {})",
                self.banner_file.display()
            ),
        )
        .with_suggestion(Suggestion::with_edit(
            "Insert the license banner at the top of the file",
            edit,
        ))]
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
