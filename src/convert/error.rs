//! Fatal conversion errors.

use thiserror::Error;

use crate::parser::{Dialect, UnknownDialect};

/// Errors that abort a conversion. No partial tree is returned.
///
/// Recoverable syntax errors are not listed here: they are reported inside
/// the converted [`File`](crate::syntax::File).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The configured dialect name is not known.
    #[error("invalid dialect selection: {0}")]
    InvalidDialect(#[from] UnknownDialect),

    /// The grammar could not be loaded into the parser.
    #[error("failed to initialize the {dialect} grammar: {message}")]
    LanguageInit { dialect: Dialect, message: String },

    /// The parser produced no tree yet reported no errors.
    #[error("parser returned no tree and reported no parse errors")]
    ParserInvariant,

    /// The native root is not a program node.
    #[error("expected a program root, found '{found}'")]
    UnexpectedRoot { found: String },

    /// The source exceeds the span width.
    #[error("source is {len} bytes, larger than the 4 GiB span limit")]
    SourceTooLarge { len: usize },

    /// IO error while reading a source file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
