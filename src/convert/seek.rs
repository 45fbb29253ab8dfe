//! Boundary seeking for container headers and footers.
//!
//! The native tree rarely exposes the delimiter that separates a
//! container's wrapper (`class Foo {` … `}`) from its children, so the
//! boundary is found in the raw bytes: the first marker outside comments
//! and string literals, else the first such newline, else the whole gap.

use std::iter::FusedIterator;

/// Scans the source buffer for wrapper boundaries.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySeeker<'a> {
    buf: &'a [u8],
}

impl<'a> BoundarySeeker<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Find the wrapper boundary between the inclusive byte indices `start`
    /// and `stop`, scanning from `start` toward `stop`.
    ///
    /// Returns a cut offset such that the wrapper contains the marker:
    /// - forward (`start <= stop`): the offset just after the first `marker`,
    ///   else just after the first newline, else `stop + 1`;
    /// - backward (`start > stop`): the offset of the last `marker`, else of
    ///   the last newline, else `stop`.
    ///
    /// Comments (`# …`, `// …` to end of line, `/* … */`) and quoted
    /// strings are skipped in both directions. `#[` opens an attribute, not
    /// a comment, so strings inside attribute arguments matter.
    pub fn seek(&self, marker: u8, start: usize, stop: usize) -> usize {
        if start <= stop {
            self.seek_forward(marker, start, stop)
        } else {
            self.seek_backward(marker, stop, start)
        }
    }

    fn seek_forward(&self, marker: u8, lo: usize, hi: usize) -> usize {
        if let Some(i) = self.code_bytes(lo, hi).find(|&i| self.buf[i] == marker) {
            return i + 1;
        }
        if let Some(i) = self.code_bytes(lo, hi).find(|&i| self.buf[i] == b'\n') {
            tracing::trace!(marker = %char::from(marker), lo, hi, "no marker, cutting after newline");
            return i + 1;
        }
        tracing::trace!(marker = %char::from(marker), lo, hi, "no marker or newline, taking whole gap");
        hi + 1
    }

    fn seek_backward(&self, marker: u8, lo: usize, hi: usize) -> usize {
        // Comments and strings are only recognizable reading forward.
        let code: Vec<usize> = self.code_bytes(lo, hi).collect();
        if let Some(&i) = code.iter().rev().find(|&&i| self.buf[i] == marker) {
            return i;
        }
        if let Some(&i) = code.iter().rev().find(|&&i| self.buf[i] == b'\n') {
            tracing::trace!(marker = %char::from(marker), lo, hi, "no marker, cutting at newline");
            return i;
        }
        tracing::trace!(marker = %char::from(marker), lo, hi, "no marker or newline, taking whole gap");
        lo
    }

    /// Indices in `lo..=hi` outside comments and strings, ascending.
    fn code_bytes(&self, lo: usize, hi: usize) -> CodeBytes<'a> {
        let hi = hi.min(self.buf.len().saturating_sub(1));
        CodeBytes {
            buf: self.buf,
            pos: if self.buf.is_empty() { 1 } else { lo },
            hi,
        }
    }
}

/// Iterator over byte indices outside comments and string literals.
struct CodeBytes<'a> {
    buf: &'a [u8],
    pos: usize,
    hi: usize,
}

impl CodeBytes<'_> {
    /// If a comment or string opens at `i`, the index just past it (a line
    /// comment stops before its newline). Unterminated ones run to `hi`.
    fn skip_end(&self, i: usize) -> Option<usize> {
        let next = (i < self.hi).then(|| self.buf[i + 1]);
        match (self.buf[i], next) {
            (quote @ (b'\'' | b'"'), _) => Some(self.string_end(i, quote)),
            (b'#', next) if next != Some(b'[') => Some(self.find_from(i, b"\n").unwrap_or(self.hi + 1)),
            (b'/', Some(b'/')) => Some(self.find_from(i, b"\n").unwrap_or(self.hi + 1)),
            (b'/', Some(b'*')) => Some(
                self.find_from(i + 2, b"*/")
                    .map_or(self.hi + 1, |close| close + 2),
            ),
            _ => None,
        }
    }

    /// Index just past the literal opened by `quote` at `open`. A backslash
    /// escapes the next byte.
    fn string_end(&self, open: usize, quote: u8) -> usize {
        let mut i = open + 1;
        while i <= self.hi {
            match self.buf[i] {
                b'\\' => i += 2,
                byte if byte == quote => return i + 1,
                _ => i += 1,
            }
        }
        self.hi + 1
    }

    /// Index of the first occurrence of `needle` starting at or after
    /// `from` and ending at or before `hi`.
    fn find_from(&self, from: usize, needle: &[u8]) -> Option<usize> {
        if from > self.hi {
            return None;
        }
        self.buf[from..=self.hi]
            .windows(needle.len())
            .position(|window| window == needle)
            .map(|offset| from + offset)
    }
}

impl Iterator for CodeBytes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.pos <= self.hi {
            let i = self.pos;
            match self.skip_end(i) {
                Some(end) => self.pos = end,
                None => {
                    self.pos = i + 1;
                    return Some(i);
                }
            }
        }
        None
    }
}

impl FusedIterator for CodeBytes<'_> {}
