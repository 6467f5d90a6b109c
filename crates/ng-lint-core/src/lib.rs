//! # ng-lint-core
//!
//! Core framework for Angular TypeScript style linting.
//!
//! This crate provides the foundational traits and types for building
//! style linters over Tree-sitter syntax trees. It includes:
//!
//! - [`SourceDocument`] wrapping one file's text and parsed tree
//! - [`walk`] for pre-order traversal shared by every rule
//! - [`Rule`] trait for per-file rules
//! - [`Violation`] for representing lint findings, with optional fixes
//! - [`Linter`] for running a rule set over documents
//!
//! ## Example
//!
//! ```ignore
//! use ng_lint_core::{Linter, SourceDocument};
//!
//! let linter = Linter::new().rule(MyRule::new());
//! let doc = SourceDocument::parse("app.component.ts", source)?;
//! let violations = linter.check_document(&doc);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod document;
mod linter;
mod rule;
mod types;
mod walk;

pub use document::{ParseError, SourceDocument};
pub use linter::Linter;
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, TextEdit, Violation, ViolationDiagnostic};
pub use walk::walk;

/// Re-export of the Tree-sitter node type rules navigate with.
pub use tree_sitter::Node;
