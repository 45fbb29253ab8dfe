//! Output tree nodes.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::NodeKind;
use crate::base::Span;

/// One node of the output tree.
///
/// Invariants:
/// - `children` are ordered by span start and do not overlap.
/// - With children, `header_span` and `footer_span` are both present and
///   `header_span, children[0].span, .., footer_span` tile `span` exactly.
/// - Without children, both are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default)]
    pub name: SmolStr,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_span: Option<Span>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_span: Option<Span>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// A node without children.
    pub fn leaf(kind: NodeKind, name: impl Into<SmolStr>, span: Span) -> Self {
        Self {
            kind,
            name: name.into(),
            span,
            header_span: None,
            footer_span: None,
            children: Vec::new(),
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Move this node's outer boundaries to `span`, which must contain the
    /// current span. Header and footer follow so inner tiling is kept.
    pub(crate) fn stretch(&mut self, span: Span) {
        debug_assert!(span.contains_span(&self.span), "stretch may only grow a span");
        if let Some(header) = self.header_span.as_mut() {
            *header = header.with_start(span.start());
        }
        if let Some(footer) = self.footer_span.as_mut() {
            *footer = footer.with_end(span.end());
        }
        self.span = span;
    }

    /// Pre-order iterator over this node and all its descendants.
    pub fn descendants(&self) -> impl Iterator<Item = &Node> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Verify the tiling invariant at this node and every node below it.
    ///
    /// The error names the first offending boundary, e.g.
    /// `children[1].children[0]: gap before footer (12 != 14)`.
    pub fn check_tiling(&self) -> Result<(), String> {
        self.check_tiling_at("")
    }

    fn check_tiling_at(&self, path: &str) -> Result<(), String> {
        let (header, footer) = match (self.header_span, self.footer_span) {
            (None, None) if self.children.is_empty() => return Ok(()),
            (Some(header), Some(footer)) if !self.children.is_empty() => (header, footer),
            _ => {
                return Err(format!(
                    "{path}: header/footer presence does not match {} children",
                    self.children.len()
                ));
            }
        };

        if header.start() != self.span.start() {
            return Err(format!(
                "{path}: header starts at {} instead of {}",
                header.start(),
                self.span.start()
            ));
        }

        let mut prev = header;
        for (i, child) in self.children.iter().enumerate() {
            let child_path = format!("{path}.children[{i}]");
            if !prev.abuts(&child.span) {
                return Err(format!(
                    "{child_path}: starts at {} but previous element ends at {}",
                    child.span.start(),
                    prev.end()
                ));
            }
            child.check_tiling_at(&child_path)?;
            prev = child.span;
        }

        if !prev.abuts(&footer) {
            return Err(format!(
                "{path}: gap before footer ({} != {})",
                prev.end(),
                footer.start()
            ));
        }
        if footer.end() != self.span.end() {
            return Err(format!(
                "{path}: footer ends at {} instead of {}",
                footer.end(),
                self.span.end()
            ));
        }
        Ok(())
    }
}
