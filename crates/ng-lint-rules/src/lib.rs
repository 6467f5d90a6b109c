//! # ng-lint-rules
//!
//! Built-in Angular style rules for ng-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | NG001 | `ng-consistent-naming` | Keeps class, file, selector, and pipe names consistent |
//! | NG002 | `consistent-decorator-layout` | Parameter decorators share the line, all others take their own |
//! | NG003 | `no-single-line-decorators` | Every decorator takes its own line |
//! | NG004 | `no-empty-lines-near-brackets` | Flags blank lines directly inside brackets |
//! | NG005 | `require-license-banner` | Requires matched files to start with the license banner |
//!
//! ## Usage
//!
//! ```ignore
//! use ng_lint_core::Linter;
//! use ng_lint_rules::{DecoratorLayout, NgConsistentNaming};
//!
//! let linter = Linter::new()
//!     .rule(NgConsistentNaming::new().vendor_prefixes(["app-"]))
//!     .rule(DecoratorLayout::consistent());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod decorator_layout;
mod decorators;
mod ng_consistent_naming;
mod no_empty_lines_near_brackets;
mod presets;
mod require_license_banner;

pub use decorator_layout::{DecoratorLayout, LayoutMode};
pub use decorators::MarkerArgs;
pub use ng_consistent_naming::NgConsistentNaming;
pub use no_empty_lines_near_brackets::NoEmptyLinesNearBrackets;
pub use presets::{all_rules, default_rules};
pub use require_license_banner::{BannerError, RequireLicenseBanner};

/// Re-export core types for convenience.
pub use ng_lint_core::{Rule, Severity, Violation};
