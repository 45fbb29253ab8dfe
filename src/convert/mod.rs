//! Conversion engine: native PHP syntax tree → language-agnostic AST.
//!
//! ```text
//! source ─→ NativeParser ─→ Tree ─→ TreeBuilder ─→ File.children
//!                 │             (Grammar: classify / name / span,
//!                 │              BoundarySeeker: header / footer cuts)
//!                 └─→ SyntaxError list ─→ first_parsing_error ─→ File.parsingError
//! ```
//!
//! A conversion is one synchronous depth-first pass over an immutable tree
//! and buffer. Independent conversions share nothing and can run in
//! parallel; see [`convert_many`].

mod builder;
mod classify;
mod error;
mod error_map;
mod grammar;
mod names;
mod nodes;
mod options;
mod seek;

use std::path::Path;

use rayon::prelude::*;

pub use builder::TreeBuilder;
pub use classify::Classified;
pub use error::ConvertError;
pub use error_map::first_parsing_error;
pub use grammar::{Grammar, PhpGrammar, PhpOnlyGrammar, grammar_for};
pub use options::{ConvertOptions, ErrorPositionStyle};
pub use seek::BoundarySeeker;

use crate::base::SourceView;
use crate::parser::NativeParser;
use crate::syntax::File;

/// Convert one source buffer.
///
/// Recoverable syntax errors never fail the conversion: the first one is
/// attached to the returned [`File`] and the tree is built from whatever
/// the parser recovered.
///
/// # Errors
///
/// Returns an error if:
/// - The grammar cannot be loaded
/// - The parser yields no tree without reporting an error
/// - The native root is not a program
/// - The source is too large for byte spans
pub fn convert(source: &[u8], name: &str, options: &ConvertOptions) -> Result<File, ConvertError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ConvertError::SourceTooLarge { len: source.len() });
    }

    let mut parser =
        NativeParser::new(options.dialect).map_err(|e| ConvertError::LanguageInit {
            dialect: options.dialect,
            message: e.to_string(),
        })?;
    let parse = parser.parse(source, name);

    let children = match &parse.tree {
        Some(tree) => TreeBuilder::new(grammar_for(options.dialect), SourceView::new(source))
            .report_unrecognized(options.report_unrecognized)
            .build_file(tree.root_node())?,
        None if !parse.has_errors() => return Err(ConvertError::ParserInvariant),
        None => Vec::new(),
    };

    let parsing_error = first_parsing_error(&parse.errors, options.error_position, source);
    tracing::debug!(
        name,
        dialect = %options.dialect,
        children = children.len(),
        errors = parse.errors.len(),
        "converted source"
    );

    Ok(File::new(name)
        .with_children(children)
        .with_parsing_error(parsing_error))
}

/// Read and convert a file, naming it by its file name.
pub fn convert_path(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<File, ConvertError> {
    let path = path.as_ref();
    let source = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    convert(&source, &name, options)
}

/// Convert independent `(name, source)` pairs in parallel. Results keep the
/// input order.
pub fn convert_many<N, S>(inputs: &[(N, S)], options: &ConvertOptions) -> Vec<Result<File, ConvertError>>
where
    N: AsRef<str> + Sync,
    S: AsRef<[u8]> + Sync,
{
    inputs
        .par_iter()
        .map(|(name, source)| convert(source.as_ref(), name.as_ref(), options))
        .collect()
}

#[cfg(test)]
mod tests;
