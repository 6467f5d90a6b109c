//! Parsed source documents.
//!
//! [`SourceDocument`] bundles one file's path, full text, and its Tree-sitter
//! syntax tree. The tree is produced by the external TypeScript grammar; the
//! linter only ever reads it.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

use crate::types::Location;

/// Errors that can occur while preparing a document for analysis.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The TypeScript grammar could not be loaded.
    #[error("Failed to load TypeScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    /// Tree-sitter produced no tree for the file.
    #[error("Failed to parse {path}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
    },
}

/// One source file prepared for rule evaluation.
///
/// Immutable for the duration of a rule pass: the tree owns all nodes and
/// rules hold only read access via node navigation.
pub struct SourceDocument {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl SourceDocument {
    /// Parses TypeScript source into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or the parser
    /// produces no tree.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self, ParseError> {
        let path = path.into();
        let text = text.into();

        let mut parser = Parser::new();
        let language = tree_sitter_typescript::LANGUAGE_TYPESCRIPT;
        parser.set_language(&language.into())?;

        let tree = parser.parse(&text, None).ok_or_else(|| ParseError::Parse {
            path: path.clone(),
        })?;

        debug!("Parsed {} ({} bytes)", path.display(), text.len());

        Ok(Self { path, text, tree })
    }

    /// Path of the file as supplied by the caller.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Root node of the syntax tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    #[must_use]
    pub fn node_text(&self, node: Node<'_>) -> &str {
        self.text.get(node.start_byte()..node.end_byte()).unwrap_or("")
    }

    /// Whether two byte positions fall on the same line.
    ///
    /// Positions are Tree-sitter rows taken from node start/end points.
    #[must_use]
    pub fn same_line(a_row: usize, b_row: usize) -> bool {
        a_row == b_row
    }

    /// Location anchored at the start of `node`, spanning the node.
    #[must_use]
    pub fn location_of(&self, node: Node<'_>) -> Location {
        let start = node.start_position();
        Location::new(self.path.clone(), start.row + 1, start.column + 1)
            .with_span(node.start_byte(), node.end_byte() - node.start_byte())
    }

    /// Zero-length location anchored at the start of `node`.
    #[must_use]
    pub fn location_at_start(&self, node: Node<'_>) -> Location {
        let start = node.start_position();
        Location::new(self.path.clone(), start.row + 1, start.column + 1)
            .with_span(node.start_byte(), 0)
    }

    /// Zero-length location anchored at the end of `node`.
    #[must_use]
    pub fn location_at_end(&self, node: Node<'_>) -> Location {
        let end = node.end_position();
        Location::new(self.path.clone(), end.row + 1, end.column + 1)
            .with_span(node.end_byte(), 0)
    }

    /// Zero-length location at the very start of the file.
    #[must_use]
    pub fn location_at_file_start(&self) -> Location {
        Location::new(self.path.clone(), 1, 1).with_span(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SourceDocument {
        SourceDocument::parse("test.ts", src).expect("parse failed")
    }

    #[test]
    fn parses_class_declaration() {
        let doc = parse("class Foo {}\n");
        let root = doc.root();
        assert_eq!(root.kind(), "program");
        let class = root.named_child(0).expect("no child");
        assert_eq!(class.kind(), "class_declaration");
    }

    #[test]
    fn node_text_slices_source() {
        let doc = parse("class Foo {}\n");
        let class = doc.root().named_child(0).expect("no child");
        assert_eq!(doc.node_text(class), "class Foo {}");
    }

    #[test]
    fn locations_are_one_indexed() {
        let doc = parse("\nclass Foo {}\n");
        let class = doc.root().named_child(0).expect("no child");
        let loc = doc.location_of(class);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 1);
        assert_eq!(loc.offset, 1);
        assert_eq!(loc.length, "class Foo {}".len());
    }

    #[test]
    fn end_location_is_zero_length() {
        let doc = parse("class Foo {}\n");
        let class = doc.root().named_child(0).expect("no child");
        let loc = doc.location_at_end(class);
        assert_eq!(loc.offset, "class Foo {}".len());
        assert_eq!(loc.length, 0);
    }

    #[test]
    fn file_start_location() {
        let doc = parse("let x = 1;\n");
        let loc = doc.location_at_file_start();
        assert_eq!((loc.line, loc.column, loc.offset, loc.length), (1, 1, 0, 0));
    }
}
