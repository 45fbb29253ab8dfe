//! Error code definitions for native parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Input the grammar could not place (native `ERROR` nodes)
//! - E02xx: Tokens the grammar had to insert (native `MISSING` nodes)

use std::fmt;

/// Error codes for recoverable syntax errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected token or input the parser skipped during recovery
    E0101,
    /// Unexpected end of input inside a construct
    E0102,
    /// A required token is missing and was inserted by recovery
    E0201,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "unexpected input",
            Self::E0201 => "missing token",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "syntax error, unexpected input",
            Self::E0102 => "syntax error, unexpected end of file",
            Self::E0201 => "syntax error, missing token",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
