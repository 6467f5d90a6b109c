//! Rules governing decorator placement relative to the decorated declaration.
//!
//! Two variants share the implementation:
//!
//! - `consistent-decorator-layout` (NG002): decorators inside constructors
//!   and methods (parameter decorators) stay on the declaration's line,
//!   everything else goes on its own line.
//! - `no-single-line-decorators` (NG003): every decorator goes on its own
//!   line; only constructor parameter decorators are exempt.

use ng_lint_core::{walk, Node, Rule, Severity, SourceDocument, Violation};

/// Placement policy applied by [`DecoratorLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Parameter decorators share the line, all others take their own.
    Consistent,
    /// Every decorator takes its own line; constructors are exempt.
    OwnLineOnly,
}

/// Checks that decorators sit on the expected line.
#[derive(Debug, Clone, Copy)]
pub struct DecoratorLayout {
    mode: LayoutMode,
}

impl DecoratorLayout {
    /// The NG002 variant.
    #[must_use]
    pub fn consistent() -> Self {
        Self {
            mode: LayoutMode::Consistent,
        }
    }

    /// The NG003 variant.
    #[must_use]
    pub fn own_line_only() -> Self {
        Self {
            mode: LayoutMode::OwnLineOnly,
        }
    }

    /// The configured placement policy.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    fn check_decorator(
        &self,
        doc: &SourceDocument,
        decorator: Node<'_>,
        violations: &mut Vec<Violation>,
    ) {
        let Some(decorated) = decorator.parent() else {
            return;
        };
        // The token right after the marker list anchors the comparison: the
        // `class`/`export` keyword, a member name, or a parameter pattern.
        let mut cursor = decorated.walk();
        let Some(anchor) = decorated
            .children(&mut cursor)
            .find(|child| child.kind() != "decorator")
        else {
            return;
        };

        let same_line =
            SourceDocument::same_line(decorator.end_position().row, anchor.end_position().row);
        let context = member_context(decorated);

        match self.mode {
            LayoutMode::Consistent => {
                let in_member = context.is_some_and(|ctx| ctx.kind() == "method_definition");
                if in_member && !same_line {
                    violations.push(self.failure(
                        doc,
                        decorator,
                        "Decorated expression must be on the same line as its decorator",
                    ));
                } else if !in_member && same_line {
                    violations.push(self.failure(
                        doc,
                        decorator,
                        "Decorated expression must not be on the same line as its decorator",
                    ));
                }
            }
            LayoutMode::OwnLineOnly => {
                let in_constructor = context.is_some_and(|ctx| is_constructor(doc, ctx));
                if !in_constructor && same_line {
                    violations.push(self.failure(
                        doc,
                        decorator,
                        "Decorated expression must not be on the same line as its decorator",
                    ));
                }
            }
        }
    }

    fn failure(&self, doc: &SourceDocument, decorator: Node<'_>, message: &str) -> Violation {
        Violation::new(
            self.code(),
            self.name(),
            Severity::Error,
            doc.location_at_end(decorator),
            message,
        )
    }
}

impl Rule for DecoratorLayout {
    fn name(&self) -> &'static str {
        match self.mode {
            LayoutMode::Consistent => "consistent-decorator-layout",
            LayoutMode::OwnLineOnly => "no-single-line-decorators",
        }
    }

    fn code(&self) -> &'static str {
        match self.mode {
            LayoutMode::Consistent => "NG002",
            LayoutMode::OwnLineOnly => "NG003",
        }
    }

    fn description(&self) -> &'static str {
        match self.mode {
            LayoutMode::Consistent => {
                "Parameter decorators share the declaration line, all others take their own"
            }
            LayoutMode::OwnLineOnly => "Every decorator takes its own line",
        }
    }

    fn check(&self, doc: &SourceDocument) -> Vec<Violation> {
        let mut violations = Vec::new();
        walk(doc.root(), &mut |node| {
            if node.kind() == "decorator" {
                self.check_decorator(doc, node, &mut violations);
            }
        });
        violations
    }
}

/// The member enclosing a decorated node, looking through parameter lists so
/// that parameter decorators classify by the constructor or method that owns
/// them.
fn member_context(decorated: Node<'_>) -> Option<Node<'_>> {
    let parent = decorated.parent()?;
    if parent.kind() == "formal_parameters" {
        parent.parent()
    } else {
        Some(parent)
    }
}

fn is_constructor(doc: &SourceDocument, node: Node<'_>) -> bool {
    node.kind() == "method_definition"
        && node
            .child_by_field_name("name")
            .is_some_and(|name| doc.node_text(name) == "constructor")
}
