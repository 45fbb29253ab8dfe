//! Grammar dialects of the native parser.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tree_sitter::Language;

/// The two dialects of the PHP grammar the converter can parse with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// PHP embedded in free-form text; content outside `<?php … ?>` is a
    /// native `text` node.
    #[default]
    Php,
    /// Pure PHP; the opening tag is optional and there is no inline text.
    PhpOnly,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Php, Dialect::PhpOnly];

    /// The tree-sitter language for this dialect.
    pub fn language(&self) -> Language {
        match self {
            Dialect::Php => tree_sitter_php::LANGUAGE_PHP.into(),
            Dialect::PhpOnly => tree_sitter_php::LANGUAGE_PHP_ONLY.into(),
        }
    }

    /// Configuration name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Php => "php",
            Dialect::PhpOnly => "php-only",
        }
    }

    /// Detect the dialect from a file extension: `.php`, `.phtml` and
    /// friends embed text, anything else is treated as pure PHP.
    pub fn from_path(path: &str) -> Self {
        let ext = path.rsplit('.').next().unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "php" | "phtml" | "php3" | "php4" | "php5" | "php7" | "phps" => Dialect::Php,
            _ => Dialect::PhpOnly,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The configuration value named no known dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDialect(pub String);

impl fmt::Display for UnknownDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dialect '{}' (expected 'php' or 'php-only')", self.0)
    }
}

impl std::error::Error for UnknownDialect {}

impl FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "php" => Ok(Dialect::Php),
            "php-only" | "php_only" | "phponly" => Ok(Dialect::PhpOnly),
            _ => Err(UnknownDialect(value.to_string())),
        }
    }
}
