//! Rule against blank lines hugging brackets.
//!
//! A blank line immediately after an opening bracket or immediately before a
//! closing bracket adds vertical noise without grouping anything. Blocks,
//! classes, and interfaces may open with a blank line (a deliberate leading
//! separator before the first member), so only the closing side is checked
//! for those.

use ng_lint_core::{walk, Node, Rule, Severity, SourceDocument, Suggestion, Violation};

/// Rule code for no-empty-lines-near-brackets.
pub const CODE: &str = "NG004";

/// Rule name for no-empty-lines-near-brackets.
pub const NAME: &str = "no-empty-lines-near-brackets";

const BRACKETED_KINDS: [&str; 7] = [
    "statement_block",
    "class_declaration",
    "interface_declaration",
    "type_alias_declaration",
    "array",
    "object",
    "call_expression",
];

const OPENING_EXEMPT_KINDS: [&str; 3] = [
    "statement_block",
    "class_declaration",
    "interface_declaration",
];

/// Flags blank lines adjacent to brackets of multi-line nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEmptyLinesNearBrackets;

impl NoEmptyLinesNearBrackets {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_node(&self, doc: &SourceDocument, node: Node<'_>, violations: &mut Vec<Violation>) {
        let lines: Vec<&str> = doc.node_text(node).split('\n').collect();
        // Anything spanning two lines or fewer has no interior line to blank.
        if lines.len() <= 2 {
            return;
        }

        let opens_blank = lines[1].trim().is_empty();
        let closes_blank = lines[lines.len() - 2].trim().is_empty();

        if opens_blank && !OPENING_EXEMPT_KINDS.contains(&node.kind()) {
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    doc.location_at_start(node),
                    "Empty line after an opening bracket",
                )
                .with_suggestion(Suggestion::new(
                    "Remove the blank line after the opening bracket",
                )),
            );
        }

        if closes_blank {
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    Severity::Error,
                    doc.location_at_end(node),
                    "Empty line before a closing bracket",
                )
                .with_suggestion(Suggestion::new(
                    "Remove the blank line before the closing bracket",
                )),
            );
        }
    }
}

impl Rule for NoEmptyLinesNearBrackets {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Flags blank lines directly inside brackets"
    }

    fn check(&self, doc: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        walk(doc.root(), &mut |node| {
            if BRACKETED_KINDS.contains(&node.kind()) {
                self.check_node(doc, node, &mut violations);
            }
        });
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(src: &str) -> Vec<Violation> {
        let doc = SourceDocument::parse("test.ts", src).expect("parse failed");
        NoEmptyLinesNearBrackets::new().check(&doc)
    }

    #[test]
    fn tight_object_literal_passes() {
        let violations = check("const x = {\n  a: 1,\n  b: 2,\n};\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn blank_line_after_object_open_fails() {
        let violations = check("const x = {\n\n  a: 1,\n};\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("opening"));
    }

    #[test]
    fn blank_line_before_object_close_fails() {
        let violations = check("const x = {\n  a: 1,\n\n};\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("closing"));
    }

    #[test]
    fn both_sides_fire_on_one_node() {
        let violations = check("const x = [\n\n  1,\n\n];\n");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn blocks_may_open_with_a_blank_line() {
        let violations = check("function f() {\n\n  return 1;\n}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn blocks_may_not_close_with_a_blank_line() {
        let violations = check("function f() {\n  return 1;\n\n}\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("closing"));
    }

    #[test]
    fn classes_may_open_with_a_blank_line() {
        let violations = check("class Foo {\n\n  name: string;\n}\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn single_line_nodes_are_skipped() {
        let violations = check("const x = {a: 1};\nconst y = [1, 2];\n");
        assert!(violations.is_empty());
    }

    #[test]
    fn multi_line_call_arguments_are_checked() {
        let violations = check("register(\n\n  handler,\n);\n");
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("opening"));
    }

    #[test]
    fn violations_carry_a_suggestion() {
        let violations = check("const x = {\n\n  a: 1,\n};\n");
        assert!(violations[0].suggestion.is_some());
    }
}
