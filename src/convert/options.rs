//! Conversion options

use crate::parser::Dialect;

use super::ConvertError;

/// How the first parsing error's position is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorPositionStyle {
    /// Raw byte offset
    #[default]
    Offset,
    /// One-based line and column
    LineColumn,
}

/// Options for one conversion, passed explicitly to every entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Grammar dialect the source is parsed with
    pub dialect: Dialect,
    /// Log the native kind of every node the classifier does not recognize.
    /// Never changes the output tree.
    pub report_unrecognized: bool,
    /// Rendering of the parsing error position
    pub error_position: ErrorPositionStyle,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Php,
            report_unrecognized: false,
            error_position: ErrorPositionStyle::Offset,
        }
    }
}

impl ConvertOptions {
    /// Options for a dialect given by its configuration name
    /// (`"php"` or `"php-only"`).
    pub fn for_dialect_name(name: &str) -> Result<Self, ConvertError> {
        Ok(Self {
            dialect: name.parse()?,
            ..Self::default()
        })
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_report_unrecognized(mut self, enabled: bool) -> Self {
        self.report_unrecognized = enabled;
        self
    }

    pub fn with_error_position(mut self, style: ErrorPositionStyle) -> Self {
        self.error_position = style;
        self
    }
}
