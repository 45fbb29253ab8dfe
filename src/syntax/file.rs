//! Root of the output tree.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::Node;
use crate::base::Span;

/// Kind tag of the root, always serialized as `"file"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileKind {
    #[default]
    #[serde(rename = "file")]
    File,
}

/// Where a parsing error occurred, in the style selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPosition {
    /// Byte offset into the source
    Offset(u32),
    /// One-based line and column (columns count bytes)
    LineColumn { line: u32, column: u32 },
}

/// The first recoverable syntax error of a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsingError {
    pub position: ErrorPosition,
    pub message: String,
}

/// The converted file: top-level nodes plus parse error status.
///
/// The children tile the source buffer from offset 0 to its end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(default)]
    pub kind: FileKind,
    #[serde(default)]
    pub name: SmolStr,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default)]
    pub parsing_errors_detected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsing_error: Option<ParsingError>,
}

impl File {
    /// An empty file with no children and no errors.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            kind: FileKind::File,
            name: name.into(),
            children: Vec::new(),
            parsing_errors_detected: false,
            parsing_error: None,
        }
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Attach the first parsing error, marking the file as erroneous.
    pub fn with_parsing_error(mut self, error: Option<ParsingError>) -> Self {
        self.parsing_errors_detected = error.is_some();
        self.parsing_error = error;
        self
    }

    /// Offset where the last top-level child ends, or 0 without children.
    pub fn covered_len(&self) -> usize {
        self.children.last().map_or(0, |last| last.span.end())
    }

    /// Pre-order iterator over every node in the file.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> + '_ {
        self.children.iter().flat_map(Node::descendants)
    }

    /// Verify that the top-level children tile `[0, source_len)` and that
    /// every node below them satisfies the tiling invariant.
    pub fn check_tiling(&self, source_len: usize) -> Result<(), String> {
        let mut prev = Span::empty(0);
        for (i, child) in self.children.iter().enumerate() {
            if !prev.abuts(&child.span) {
                return Err(format!(
                    "children[{i}]: starts at {} but previous element ends at {}",
                    child.span.start(),
                    prev.end()
                ));
            }
            child
                .check_tiling()
                .map_err(|e| format!("children[{i}]{e}"))?;
            prev = child.span;
        }
        let covered = self.covered_len();
        if covered != source_len {
            return Err(format!("children end at {covered} instead of {source_len}"));
        }
        Ok(())
    }

    /// Serialize the output schema as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the output schema as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
