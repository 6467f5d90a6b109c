//! Generic pre-order tree traversal.
//!
//! Every rule reuses the same walk so tree-visiting bugs cannot vary per
//! rule. The walk carries no decision logic of its own.

use tree_sitter::Node;

/// Visits every descendant of `node` exactly once in pre-order.
///
/// Parents are visited before their children, children left-to-right.
/// `node` itself is not visited; rules start the walk at the file root and
/// see all nodes below it.
pub fn walk<'tree>(node: Node<'tree>, visit: &mut impl FnMut(Node<'tree>)) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child);
        walk(child, visit);
    }
}
