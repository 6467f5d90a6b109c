//! Shared decorator extraction helpers.
//!
//! Angular markers are decorators of the form `@Name({...})`. These helpers
//! pull the marker name and the string-valued properties of its first
//! object-literal argument out of the tree, as an explicit mapping of the
//! known keys rather than a free-form property bag.

use ng_lint_core::{Node, SourceDocument};

/// String-valued properties of a marker's object-literal argument.
///
/// Absent keys mean the marker did not declare that property; the rules
/// treat absence as "skip the sub-check", never as a failure.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MarkerArgs {
    /// `selector: "..."`.
    pub selector: Option<String>,
    /// `templateUrl: "..."`.
    pub template_url: Option<String>,
    /// `name: "..."`.
    pub name: Option<String>,
}

/// Returns the marker name and call node for a call-style decorator.
///
/// `@Injectable()` yields `("Injectable", <call_expression>)`; bare
/// decorators like `@sealed` and computed expressions yield `None`.
pub fn decorator_call<'tree>(
    doc: &SourceDocument,
    decorator: Node<'tree>,
) -> Option<(String, Node<'tree>)> {
    let expr = decorator.named_child(0)?;
    if expr.kind() != "call_expression" {
        return None;
    }
    let callee = expr.child_by_field_name("function")?;
    if callee.kind() != "identifier" {
        return None;
    }
    Some((doc.node_text(callee).to_string(), expr))
}

/// Extracts [`MarkerArgs`] from a marker call's first argument.
///
/// Non-object arguments and non-string property values are ignored.
pub fn marker_args(doc: &SourceDocument, call: Node<'_>) -> MarkerArgs {
    let mut args = MarkerArgs::default();

    let Some(arguments) = call.child_by_field_name("arguments") else {
        return args;
    };
    let Some(object) = arguments.named_child(0) else {
        return args;
    };
    if object.kind() != "object" {
        return args;
    }

    let mut cursor = object.walk();
    for pair in object.named_children(&mut cursor) {
        if pair.kind() != "pair" {
            continue;
        }
        let Some(key) = pair.child_by_field_name("key") else {
            continue;
        };
        if key.kind() != "property_identifier" {
            continue;
        }
        let Some(value) = pair.child_by_field_name("value").and_then(|v| string_value(doc, v))
        else {
            continue;
        };

        match doc.node_text(key) {
            "selector" => args.selector = Some(value),
            "templateUrl" => args.template_url = Some(value),
            "name" => args.name = Some(value),
            _ => {}
        }
    }

    args
}

/// Content of a string literal node, without the quotes.
pub fn string_value(doc: &SourceDocument, node: Node<'_>) -> Option<String> {
    if node.kind() != "string" {
        return None;
    }
    let mut content = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "string_fragment" {
            content.push_str(doc.node_text(child));
        }
    }
    Some(content)
}

/// All decorators attached to a class declaration.
///
/// Decorators of exported classes hang off the surrounding export statement,
/// so both the class node and an `export_statement` parent are consulted.
pub fn class_decorators<'tree>(class: Node<'tree>) -> Vec<Node<'tree>> {
    let mut decorators = Vec::new();

    if let Some(parent) = class.parent() {
        if parent.kind() == "export_statement" {
            let mut cursor = parent.walk();
            for child in parent.children(&mut cursor) {
                if child.kind() == "decorator" {
                    decorators.push(child);
                }
            }
        }
    }

    let mut cursor = class.walk();
    for child in class.children(&mut cursor) {
        if child.kind() == "decorator" {
            decorators.push(child);
        }
    }

    decorators
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SourceDocument {
        SourceDocument::parse("test.ts", src).expect("parse failed")
    }

    fn first_class_decorator(doc: &SourceDocument) -> (String, MarkerArgs) {
        let mut found = None;
        ng_lint_core::walk(doc.root(), &mut |node| {
            if node.kind() == "class_declaration" && found.is_none() {
                let decorators = class_decorators(node);
                let (name, call) =
                    decorator_call(doc, decorators[0]).expect("not a call decorator");
                found = Some((name, marker_args(doc, call)));
            }
        });
        found.expect("no decorated class")
    }

    #[test]
    fn extracts_marker_name_and_args() {
        let doc = parse(
            "@Component({selector: \"app-foo\", templateUrl: \"./foo.component.html\"})\nclass FooComponent {}\n",
        );
        let (name, args) = first_class_decorator(&doc);
        assert_eq!(name, "Component");
        assert_eq!(args.selector.as_deref(), Some("app-foo"));
        assert_eq!(args.template_url.as_deref(), Some("./foo.component.html"));
        assert!(args.name.is_none());
    }

    #[test]
    fn finds_decorators_on_exported_classes() {
        let doc = parse("@Injectable()\nexport class FooService {}\n");
        let (name, args) = first_class_decorator(&doc);
        assert_eq!(name, "Injectable");
        assert_eq!(args, MarkerArgs::default());
    }

    #[test]
    fn non_object_argument_yields_no_args() {
        let doc = parse("@Pipe(\"oops\")\nclass FooPipe {}\n");
        let (name, args) = first_class_decorator(&doc);
        assert_eq!(name, "Pipe");
        assert_eq!(args, MarkerArgs::default());
    }

    #[test]
    fn non_string_values_are_ignored() {
        let doc = parse("@Component({selector: someVar, standalone: true})\nclass FooComponent {}\n");
        let (_, args) = first_class_decorator(&doc);
        assert!(args.selector.is_none());
    }

    #[test]
    fn single_quoted_strings_work() {
        let doc = parse("@Pipe({name: 'currencyFormat'})\nclass CurrencyFormatPipe {}\n");
        let (_, args) = first_class_decorator(&doc);
        assert_eq!(args.name.as_deref(), Some("currencyFormat"));
    }
}
