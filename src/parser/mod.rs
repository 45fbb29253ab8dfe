//! Native parser for PHP source
//!
//! The converter does not parse PHP itself. This module binds the
//! tree-sitter PHP grammar and exposes exactly what conversion needs:
//!
//! ```text
//! Source bytes + name
//!     ↓
//! NativeParser (tree-sitter, one Dialect) → Tree (or none)
//!     ↓
//! ERROR / MISSING nodes → SyntaxError list, document order
//! ```
//!
//! Each native node carries its own byte range, which serves as the
//! node-to-span lookup table.

mod dialect;
pub mod errors;
mod native;

pub use dialect::{Dialect, UnknownDialect};
pub use errors::{ErrorCode, SyntaxError};
pub use native::{NativeParse, NativeParser};

/// Re-export tree-sitter types for convenience
pub use tree_sitter::{Node as NativeNode, Tree as NativeTree};
