//! Native parser error handling module
//!
//! - Categorized error codes
//! - Syntax errors with message and source range

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::SyntaxError;
