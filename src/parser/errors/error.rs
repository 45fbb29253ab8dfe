//! Recoverable syntax error type

use text_size::{TextRange, TextSize};

use super::codes::ErrorCode;

/// A recoverable syntax error reported by the native parser.
///
/// The parser still yields a tree around the error; conversion continues on
/// the recovered structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Human-readable error message
    pub message: String,
    /// Source location
    pub range: TextRange,
    /// Categorized error code
    pub code: ErrorCode,
}

impl SyntaxError {
    /// Create a new syntax error
    pub fn new(message: impl Into<String>, range: TextRange, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            range,
            code,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize, code: ErrorCode) -> Self {
        Self::new(message, TextRange::empty(offset), code)
    }

    /// Byte offset where the error starts
    pub fn offset(&self) -> TextSize {
        self.range.start()
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", u32::from(self.range.start()), self.message)
    }
}

impl std::error::Error for SyntaxError {}
