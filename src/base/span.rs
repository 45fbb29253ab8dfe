//! Byte spans into the source buffer.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use text_size::{TextRange, TextSize};

/// A half-open byte range `[start, end)` into the source buffer.
///
/// Two spans tile when the first one's `end` equals the second one's
/// `start`. Empty spans are legal and mark a zero-width boundary.
///
/// Spans order by start offset, then by end offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span(TextRange);

impl Span {
    /// Create a span from start and end offsets.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`.
    pub fn new(start: TextSize, end: TextSize) -> Self {
        Self(TextRange::new(start, end))
    }

    /// Create a span from `usize` offsets.
    ///
    /// Offsets must fit in a `u32`; the converter rejects larger sources
    /// before any span is built.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_offsets(start: usize, end: usize) -> Self {
        Self::new(TextSize::from(start as u32), TextSize::from(end as u32))
    }

    /// A zero-width span at `offset`.
    pub fn empty(offset: usize) -> Self {
        Self::from_offsets(offset, offset)
    }

    pub fn start(&self) -> usize {
        usize::from(self.0.start())
    }

    pub fn end(&self) -> usize {
        usize::from(self.0.end())
    }

    pub fn len(&self) -> usize {
        usize::from(self.0.len())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying text-size range.
    pub fn range(&self) -> TextRange {
        self.0
    }

    /// The span as a `usize` range, for slicing the source buffer.
    pub fn as_range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Check if `next` begins exactly where this span ends.
    pub fn abuts(&self, next: &Span) -> bool {
        self.0.end() == next.0.start()
    }

    /// Check if `other` lies entirely within this span.
    pub fn contains_span(&self, other: &Span) -> bool {
        self.0.contains_range(other.0)
    }

    /// Same end, new start.
    pub fn with_start(&self, start: usize) -> Self {
        Self::from_offsets(start, self.end().max(start))
    }

    /// Same start, new end.
    pub fn with_end(&self, end: usize) -> Self {
        Self::from_offsets(self.start().min(end), end)
    }
}

impl From<TextRange> for Span {
    fn from(range: TextRange) -> Self {
        Self(range)
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::from_offsets(range.start, range.end)
    }
}

impl PartialOrd for Span {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Span {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .start()
            .cmp(&other.0.start())
            .then_with(|| self.0.end().cmp(&other.0.end()))
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start(), self.end())
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [u32::from(self.0.start()), u32::from(self.0.end())].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [start, end] = <[u32; 2]>::deserialize(deserializer)?;
        if end < start {
            return Err(serde::de::Error::custom(format!(
                "span end {end} precedes start {start}"
            )));
        }
        Ok(Self::new(TextSize::from(start), TextSize::from(end)))
    }
}
