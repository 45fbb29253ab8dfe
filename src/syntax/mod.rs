//! Output tree: the language-agnostic AST handed to diffing tools.
//!
//! A [`File`] owns top-level [`Node`]s; each node has a [`NodeKind`], a
//! name, a [`Span`](crate::base::Span) and, for containers with children,
//! header and footer spans. Trees are built once per conversion and never
//! mutated afterwards.

pub mod file;
pub mod kind;
pub mod node;

pub use file::{ErrorPosition, File, FileKind, ParsingError};
pub use kind::NodeKind;
pub use node::Node;
