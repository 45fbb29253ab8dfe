//! Foundation types for the converter.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Span`] - Half-open byte ranges into the source buffer
//! - [`TextRange`], [`TextSize`] - The text-size primitives behind [`Span`]
//! - [`LineCol`], [`LineIndex`] - Byte offset to line/column conversion
//! - [`SourceView`] - Read-only source bytes with node span and text lookup
//!
//! This module depends on no other module of the crate except for the native
//! node type that [`SourceView`] reads spans from.

mod line_index;
mod source;
mod span;

pub use line_index::{LineCol, LineIndex};
pub use source::SourceView;
pub use span::Span;

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
