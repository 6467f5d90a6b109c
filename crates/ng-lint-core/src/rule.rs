//! Rule trait for defining lint rules.

use crate::document::SourceDocument;
use crate::types::{Severity, Violation};

/// A per-file lint rule evaluated against a parsed [`SourceDocument`].
///
/// A rule is a pure decision function: given the document (tree, text, and
/// path) and the rule's own read-only options, it returns zero or more
/// failures. Rules never mutate the tree and hold no state across files
/// beyond their construction-time options.
///
/// # Example
///
/// ```ignore
/// use ng_lint_core::{Rule, SourceDocument, Violation, Severity, walk};
///
/// pub struct NoClasses;
///
/// impl Rule for NoClasses {
///     fn name(&self) -> &'static str { "no-classes" }
///     fn code(&self) -> &'static str { "X001" }
///
///     fn check(&self, doc: &SourceDocument) -> Vec<Violation> {
///         let mut violations = Vec::new();
///         walk(doc.root(), &mut |node| {
///             if node.kind() == "class_declaration" {
///                 violations.push(Violation::new(
///                     self.code(),
///                     self.name(),
///                     Severity::Warning,
///                     doc.location_of(node),
///                     "Classes are not allowed",
///                 ));
///             }
///         });
///         violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "ng-consistent-naming").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "NG001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for failures from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single document and returns any failures found.
    fn check(&self, doc: &SourceDocument) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
