//! Read-only view over the source buffer.

use std::borrow::Cow;

use tree_sitter::Node;

use super::Span;

/// The raw source bytes plus span and text lookup for native nodes.
///
/// Text is decoded as UTF-8 when valid and as Latin-1 otherwise, so every
/// byte maps to a character and nothing is lost for legacy-encoded files.
#[derive(Debug, Clone, Copy)]
pub struct SourceView<'a> {
    bytes: &'a [u8],
}

impl<'a> SourceView<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte span of a native node.
    pub fn span(&self, node: Node<'_>) -> Span {
        Span::from(node.byte_range())
    }

    /// Verbatim source text of a native node.
    pub fn text(&self, node: Node<'_>) -> Cow<'a, str> {
        self.slice(self.span(node))
    }

    /// Verbatim source text of an arbitrary span, clamped to the buffer.
    pub fn slice(&self, span: Span) -> Cow<'a, str> {
        let end = span.end().min(self.bytes.len());
        let start = span.start().min(end);
        decode(&self.bytes[start..end])
    }
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            tracing::trace!(error = %e, len = bytes.len(), "decoding non-UTF-8 text as Latin-1");
            Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())
        }
    }
}
