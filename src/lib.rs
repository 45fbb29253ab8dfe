//! # php-semantic
//!
//! Converts the concrete syntax tree of a PHP source file into a uniform,
//! language-agnostic AST for structural diffing. Every output node carries a
//! byte span, a coarse kind tag and a name; containers also carry header and
//! footer spans so that, at every depth, `header, children.., footer` tile
//! the node's span exactly.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → Conversion engine: classify, names, seek, build, error mapping
//!   ↓
//! syntax    → Output data model: File, Node, NodeKind, ParsingError
//!   ↓
//! parser    → Native parser binding (tree-sitter-php), dialects, syntax errors
//!   ↓
//! base      → Primitives: Span, LineIndex, SourceView
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → convert)
// ============================================================================

/// Foundation types: Span, LineIndex, SourceView
pub mod base;

/// Native parser: tree-sitter-php dialects and recoverable syntax errors
pub mod parser;

/// Output tree: File, Node, NodeKind
pub mod syntax;

/// Conversion engine from native trees to the output tree
pub mod convert;

pub use base::{LineCol, LineIndex, SourceView, Span, TextRange, TextSize};
pub use convert::{
    ConvertError, ConvertOptions, ErrorPositionStyle, convert, convert_many, convert_path,
};
pub use parser::{Dialect, SyntaxError};
pub use syntax::{ErrorPosition, File, Node, NodeKind, ParsingError};
