//! Configuration loading for the CLI.
//!
//! `ng-lint.toml` carries rule options only; the rule set itself is fixed
//! (NG001, NG002, NG004, plus NG005 when a banner is configured).

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use ng_lint_core::Linter;
use ng_lint_rules::{
    DecoratorLayout, NgConsistentNaming, NoEmptyLinesNearBrackets, RequireLicenseBanner,
};

/// Default configuration file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ng-lint.toml";

/// Parsed `ng-lint.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    /// `[naming]` section.
    #[serde(default)]
    pub naming: NamingConfig,

    /// `[license-banner]` section; absent means NG005 is not run.
    #[serde(default)]
    pub license_banner: Option<LicenseBannerConfig>,
}

/// Options for the naming rule.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct NamingConfig {
    /// Selector vendor prefixes accepted by NG001.
    #[serde(default)]
    pub vendor_prefixes: Vec<String>,
}

/// Options for the license banner rule.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LicenseBannerConfig {
    /// Banner file, resolved against the config file's directory.
    pub banner_file: PathBuf,

    /// Glob restricting which analyzed files need the banner.
    #[serde(default)]
    pub file_pattern: Option<String>,
}

/// A configuration together with the directory it was loaded from.
///
/// The directory anchors banner-file resolution, so a config found next to
/// the project works the same from any working directory.
#[derive(Debug)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// Directory containing the config file.
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    /// Loads configuration for a run.
    ///
    /// An explicit `--config` path must exist; otherwise `ng-lint.toml` in
    /// the working directory is used when present, and defaults apply when
    /// it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                candidate.exists().then_some(candidate)
            }
        };

        match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                let config = Config::parse(&content)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                let base_dir = path
                    .parent()
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .unwrap_or(Path::new("."))
                    .to_path_buf();
                debug!("Loaded config from {}", path.display());
                Ok(Self { config, base_dir })
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self {
                    config: Config::default(),
                    base_dir: PathBuf::from("."),
                })
            }
        }
    }

    /// Builds the linter this configuration describes.
    pub fn build_linter(&self) -> Result<Linter> {
        let mut linter = Linter::new()
            .rule(
                NgConsistentNaming::new()
                    .vendor_prefixes(self.config.naming.vendor_prefixes.iter().cloned()),
            )
            .rule(DecoratorLayout::consistent())
            .rule(NoEmptyLinesNearBrackets::new());

        if let Some(banner) = &self.config.license_banner {
            let rule = RequireLicenseBanner::new(
                &self.base_dir,
                banner.banner_file.clone(),
                banner.file_pattern.as_deref(),
            )
            .context("Invalid [license-banner] configuration")?;
            linter = linter.rule(rule);
        }

        Ok(linter)
    }
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML configuration")
    }
}
