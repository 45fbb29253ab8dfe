//! Tree building: one output node per recognized native node, with
//! header/footer spans and gap ownership that make every level tile.

use tree_sitter::Node as NativeNode;

use super::ConvertError;
use super::grammar::Grammar;
use super::nodes::unwrap_transparent;
use super::seek::BoundarySeeker;
use crate::base::{SourceView, Span};
use crate::syntax::{Node, NodeKind};

/// Native root kinds a file can be assembled from. `ERROR` roots appear
/// when recovery could not build a program; their children are still the
/// best available statements.
const ROOT_KINDS: [&str; 2] = ["program", "ERROR"];

/// Builds the output tree for one source buffer.
pub struct TreeBuilder<'a> {
    grammar: &'a dyn Grammar,
    source: SourceView<'a>,
    seeker: BoundarySeeker<'a>,
    report_unrecognized: bool,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(grammar: &'a dyn Grammar, source: SourceView<'a>) -> Self {
        Self {
            grammar,
            source,
            seeker: BoundarySeeker::new(source.bytes()),
            report_unrecognized: false,
        }
    }

    /// Log unrecognized native kinds at info level instead of trace.
    pub fn report_unrecognized(mut self, enabled: bool) -> Self {
        self.report_unrecognized = enabled;
        self
    }

    /// Convert every top-level statement of `root` and assemble the file's
    /// children so they tile the whole buffer.
    pub fn build_file(&self, root: NativeNode<'_>) -> Result<Vec<Node>, ConvertError> {
        if !ROOT_KINDS.contains(&root.kind()) {
            return Err(ConvertError::UnexpectedRoot {
                found: root.kind().to_string(),
            });
        }

        let mut cursor = root.walk();
        let statements: Vec<_> = root.named_children(&mut cursor).collect();
        let children = statements
            .into_iter()
            .filter_map(|statement| self.build_node(statement))
            .collect();
        Ok(self.assemble_file(children))
    }

    /// Convert one native node, or `None` if it is not recognized.
    pub fn build_node(&self, node: NativeNode<'_>) -> Option<Node> {
        let Some(classified) = self.grammar.classify(node, self.source) else {
            self.note_unrecognized(node);
            return None;
        };

        debug_assert!(
            classified.children.is_empty() || classified.kind.is_container(),
            "{} is not a container kind",
            classified.kind
        );
        let span = self.grammar.span(node, self.source);
        let name = self.grammar.name(classified.target, self.source);
        let mut out = Node::leaf(classified.kind, name, span);

        let children: Vec<Node> = classified
            .children
            .into_iter()
            .filter_map(|child| self.build_node(child))
            .collect();
        if !children.is_empty() {
            self.frame(&mut out, children);
        }
        Some(out)
    }

    /// Compute header and footer of a container and tile its children
    /// between them.
    fn frame(&self, container: &mut Node, mut children: Vec<Node>) {
        let span = container.span;
        let (Some(first), Some(last)) = (children.first(), children.last()) else {
            return;
        };

        let header_cut = if first.span.start() > span.start() {
            self.seeker.seek(b'{', span.start(), first.span.start() - 1)
        } else {
            span.start()
        };
        let footer_cut = if span.end() > last.span.end() {
            self.seeker.seek(b'}', span.end() - 1, last.span.end())
        } else {
            span.end()
        };

        tile(&mut children, header_cut, footer_cut);
        container.header_span = Some(Span::from_offsets(span.start(), header_cut));
        container.footer_span = Some(Span::from_offsets(footer_cut, span.end()));
        container.children = children;
    }

    /// Make the top-level nodes tile `[0, len)`, synthesizing a leading
    /// header node for content no statement covers.
    fn assemble_file(&self, mut children: Vec<Node>) -> Vec<Node> {
        let len = self.source.len();
        if len == 0 {
            return Vec::new();
        }
        let Some(first) = children.first() else {
            return vec![Node::leaf(NodeKind::Header, "", Span::from_offsets(0, len))];
        };

        let first_start = first.span.start();
        if first_start > 0 {
            let cut = find_blank_line(&self.source.bytes()[..first_start])
                .map_or(first_start, |newline| newline + 1);
            children.insert(0, Node::leaf(NodeKind::Header, "", Span::from_offsets(0, cut)));
        }

        tile(&mut children, 0, len);
        children
    }

    /// Log the native kind the classifier failed on, looking through
    /// transparent wrappers.
    fn note_unrecognized(&self, node: NativeNode<'_>) {
        let node = unwrap_transparent(node);
        if self.report_unrecognized {
            tracing::info!(
                native_kind = node.kind(),
                start = node.start_byte(),
                dialect = %self.grammar.dialect(),
                "unrecognized native node"
            );
        } else {
            tracing::trace!(native_kind = node.kind(), "dropping native node");
        }
    }
}

/// Stretch `nodes` so they tile `[start, end)`: leading gaps belong to the
/// following node, the trailing gap to the last node.
fn tile(nodes: &mut [Node], start: usize, end: usize) {
    let mut pos = start;
    let count = nodes.len();
    for (i, node) in nodes.iter_mut().enumerate() {
        let node_end = if i + 1 == count { end } else { node.span.end() };
        node.stretch(Span::from_offsets(pos, node_end));
        pos = node_end;
    }
}

/// Offset of the first `\n` of the first blank line.
fn find_blank_line(bytes: &[u8]) -> Option<usize> {
    bytes.windows(2).position(|pair| pair == b"\n\n")
}
