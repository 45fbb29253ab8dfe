//! Native parser binding.
//!
//! Wraps a tree-sitter parser configured for one [`Dialect`] and turns the
//! error-recovery markers it leaves in the tree into [`SyntaxError`]s.

use tree_sitter::{LanguageError, Node, Parser, Tree};

use super::Dialect;
use super::errors::{ErrorCode, SyntaxError};
use crate::base::SourceView;

/// Longest token excerpt quoted in an "unexpected" message.
const EXCERPT_LIMIT: usize = 32;

/// Result of a native parse: the tree (if any) and the recoverable errors
/// found in it, in document order.
#[derive(Debug)]
pub struct NativeParse {
    pub tree: Option<Tree>,
    pub errors: Vec<SyntaxError>,
}

impl NativeParse {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// A tree-sitter parser bound to one dialect.
///
/// Parsers are not shared between threads; parallel conversions each build
/// their own.
pub struct NativeParser {
    parser: Parser,
    dialect: Dialect,
}

impl NativeParser {
    pub fn new(dialect: Dialect) -> Result<Self, LanguageError> {
        let mut parser = Parser::new();
        parser.set_language(&dialect.language())?;
        Ok(Self { parser, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Parse the full source. `name` only identifies the source in logs.
    pub fn parse(&mut self, source: &[u8], name: &str) -> NativeParse {
        let tree = self.parser.parse(source, None);
        let errors = match &tree {
            Some(tree) => collect_errors(tree.root_node(), SourceView::new(source)),
            None => Vec::new(),
        };
        tracing::trace!(
            name,
            dialect = %self.dialect,
            has_tree = tree.is_some(),
            errors = errors.len(),
            "native parse finished"
        );
        for error in &errors {
            tracing::trace!(name, error = %error.format(), "syntax error");
        }
        NativeParse { tree, errors }
    }
}

/// Collect `ERROR` and `MISSING` nodes in document order.
///
/// Error nodes are reported once; their descendants are not searched.
fn collect_errors(root: Node<'_>, source: SourceView<'_>) -> Vec<SyntaxError> {
    let mut errors = Vec::new();
    if !root.has_error() {
        return errors;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_missing() {
            errors.push(missing_error(node));
            continue;
        }
        if node.is_error() {
            errors.push(unexpected_error(node, source));
            continue;
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
    errors
}

/// Missing tokens are zero-width at the point they were expected.
fn missing_error(node: Node<'_>) -> SyntaxError {
    SyntaxError::at_offset(
        format!("syntax error, missing '{}'", node.kind()),
        source_range(node).start(),
        ErrorCode::E0201,
    )
}

fn unexpected_error(node: Node<'_>, source: SourceView<'_>) -> SyntaxError {
    if node.start_byte() >= source.len() {
        return SyntaxError::new(
            ErrorCode::E0102.default_message(),
            source_range(node),
            ErrorCode::E0102,
        );
    }

    // The first leaf is the token the grammar could not place.
    let mut cursor = node.walk();
    while cursor.goto_first_child() {}
    let leaf = cursor.node();
    let text = source.text(leaf);
    let excerpt: String = text.trim().chars().take(EXCERPT_LIMIT).collect();

    let message = if excerpt.is_empty() {
        ErrorCode::E0101.default_message().to_string()
    } else {
        format!("syntax error, unexpected '{excerpt}'")
    };
    SyntaxError::new(message, source_range(node), ErrorCode::E0101)
}

#[allow(clippy::cast_possible_truncation)]
fn source_range(node: Node<'_>) -> text_size::TextRange {
    text_size::TextRange::new(
        (node.start_byte() as u32).into(),
        (node.end_byte() as u32).into(),
    )
}
