//! Per-document lint driver.

use tracing::debug;

use crate::document::SourceDocument;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

/// Runs a fixed set of rules over documents.
///
/// The linter owns its rules; documents are analyzed independently, one
/// traversal invocation per rule, and the collected failures are handed back
/// to the caller as an explicit value.
#[derive(Default)]
pub struct Linter {
    rules: Vec<RuleBox>,
}

impl Linter {
    /// Creates a linter with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Checks one document against every rule, in registration order.
    #[must_use]
    pub fn check_document(&self, doc: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            debug!("Running {} on {}", rule.name(), doc.path().display());
            violations.extend(rule.check(doc));
        }
        violations
    }

    /// Checks several documents and aggregates the results.
    ///
    /// Failures are sorted by file, then line, then column.
    #[must_use]
    pub fn check_documents<'a>(
        &self,
        docs: impl IntoIterator<Item = &'a SourceDocument>,
    ) -> LintResult {
        let mut result = LintResult::new();
        for doc in docs {
            result.violations.extend(self.check_document(doc));
            result.files_checked += 1;
        }

        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    struct CountClasses;

    impl Rule for CountClasses {
        fn name(&self) -> &'static str {
            "count-classes"
        }
        fn code(&self) -> &'static str {
            "T001"
        }

        fn check(&self, doc: &SourceDocument) -> Vec<Violation> {
            let mut violations = Vec::new();
            crate::walk::walk(doc.root(), &mut |node| {
                if node.kind() == "class_declaration" {
                    violations.push(Violation::new(
                        "T001",
                        "count-classes",
                        Severity::Warning,
                        doc.location_of(node),
                        "class found",
                    ));
                }
            });
            violations
        }
    }

    #[test]
    fn runs_rules_over_documents() {
        let linter = Linter::new().rule(CountClasses);
        let a = SourceDocument::parse("a.ts", "class A {}\nclass B {}\n").expect("parse failed");
        let b = SourceDocument::parse("b.ts", "let x = 1;\n").expect("parse failed");

        let result = linter.check_documents([&a, &b]);
        assert_eq!(result.files_checked, 2);
        assert_eq!(result.violations.len(), 2);
    }

    #[test]
    fn sorts_by_file_then_line() {
        let linter = Linter::new().rule(CountClasses);
        let b = SourceDocument::parse("b.ts", "class B {}\n").expect("parse failed");
        let a = SourceDocument::parse("a.ts", "\n\nclass A {}\n").expect("parse failed");

        let result = linter.check_documents([&b, &a]);
        assert_eq!(result.violations[0].location.file.to_string_lossy(), "a.ts");
        assert_eq!(result.violations[1].location.file.to_string_lossy(), "b.ts");
    }

    #[test]
    fn empty_linter_finds_nothing() {
        let linter = Linter::new();
        let doc = SourceDocument::parse("a.ts", "class A {}\n").expect("parse failed");
        assert!(linter.check_document(&doc).is_empty());
        assert_eq!(linter.rule_count(), 0);
    }
}
