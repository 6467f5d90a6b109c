//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::DEFAULT_CONFIG_FILE;

const DEFAULT_CONFIG: &str = r#"# ng-lint configuration

[naming]
# Selector vendor prefixes accepted by ng-consistent-naming (NG001).
# A component selector must be the class name with one of these prefixes.
vendor-prefixes = ["app-"]

# Require every matched file to start with a license banner (NG005).
# The banner file is resolved relative to this config file.
#
# [license-banner]
# banner-file = "license-banner.txt"
# file-pattern = "src/**/*.ts"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created {DEFAULT_CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {DEFAULT_CONFIG_FILE} to configure rules");
    println!("  2. Run: ng-lint check src/app/*.ts");

    Ok(())
}
