//! Line-offset table for converting byte offsets to line/column positions.

use text_size::TextSize;

/// A zero-based line/column position. Columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

/// Offsets of the first byte of every line in a source buffer.
///
/// Hosts that post-process the output tree (translating byte spans to
/// line/column numbering) consume this table through [`LineIndex::line_starts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(text: &[u8]) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.iter()
                .enumerate()
                .filter(|(_, byte)| **byte == b'\n')
                .map(|(offset, _)| TextSize::from(offset as u32 + 1)),
        );
        Self { line_starts }
    }

    /// Convert a byte offset to a zero-based line/column pair.
    #[allow(clippy::cast_possible_truncation)]
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let col = offset - self.line_starts[line];
        LineCol {
            line: line as u32,
            col: col.into(),
        }
    }

    pub fn line_starts(&self) -> &[TextSize] {
        &self.line_starts
    }
}
