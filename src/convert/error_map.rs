//! Rendering of the first recoverable syntax error.

use super::ErrorPositionStyle;
use crate::base::LineIndex;
use crate::parser::SyntaxError;
use crate::syntax::{ErrorPosition, ParsingError};

/// Render the first error, if any. Only one location is surfaced per file.
pub fn first_parsing_error(
    errors: &[SyntaxError],
    style: ErrorPositionStyle,
    source: &[u8],
) -> Option<ParsingError> {
    let first = errors.first()?;
    let position = match style {
        ErrorPositionStyle::Offset => ErrorPosition::Offset(first.offset().into()),
        ErrorPositionStyle::LineColumn => {
            let line_col = LineIndex::new(source).line_col(first.offset());
            ErrorPosition::LineColumn {
                line: line_col.line + 1,
                column: line_col.col + 1,
            }
        }
    };
    Some(ParsingError {
        position,
        message: first.message.clone(),
    })
}
