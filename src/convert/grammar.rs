//! Per-dialect capabilities the conversion engine is parameterized over.
//!
//! The tiling, seeking and building logic is written once against
//! [`Grammar`]; each dialect only says how its native vocabulary maps to
//! kinds, names and spans.

use tree_sitter::Node;

use super::classify::{Classified, classify_common};
use super::names::name_of;
use crate::base::{SourceView, Span};
use crate::parser::Dialect;
use crate::syntax::NodeKind;

/// Capability interface of one grammar dialect.
pub trait Grammar: Sync {
    fn dialect(&self) -> Dialect;

    /// Map a native node to its kind and the native children to convert,
    /// or `None` if the node has no output counterpart.
    fn classify<'t>(&self, node: Node<'t>, source: SourceView<'_>) -> Option<Classified<'t>>;

    /// Descriptive name of a native node; empty when it has none.
    fn name(&self, node: Node<'_>, source: SourceView<'_>) -> String {
        name_of(node, source)
    }

    /// Byte span of a native node.
    fn span(&self, node: Node<'_>, source: SourceView<'_>) -> Span {
        source.span(node)
    }
}

/// PHP embedded in free-form text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpGrammar;

impl Grammar for PhpGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::Php
    }

    fn classify<'t>(&self, node: Node<'t>, source: SourceView<'_>) -> Option<Classified<'t>> {
        match node.kind() {
            // Text outside the PHP tags, and `?> … <?php` islands.
            "text" | "text_interpolation" => Some(Classified {
                kind: NodeKind::InlineText,
                target: node,
                children: Vec::new(),
            }),
            _ => classify_common(node, source),
        }
    }
}

/// Pure PHP without inline text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpOnlyGrammar;

impl Grammar for PhpOnlyGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::PhpOnly
    }

    fn classify<'t>(&self, node: Node<'t>, source: SourceView<'_>) -> Option<Classified<'t>> {
        classify_common(node, source)
    }
}

/// The grammar implementing `dialect`.
pub fn grammar_for(dialect: Dialect) -> &'static dyn Grammar {
    match dialect {
        Dialect::Php => &PhpGrammar,
        Dialect::PhpOnly => &PhpOnlyGrammar,
    }
}
