//! Small accessors over native nodes shared by classification and naming.

use tree_sitter::Node;

use crate::base::SourceView;

/// Named children, skipping extras such as comments.
pub(super) fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect()
}

/// Named children of the child stored under `field`, or nothing when the
/// field is absent.
pub(super) fn body_children<'t>(node: Node<'t>, field: &str) -> Vec<Node<'t>> {
    node.child_by_field_name(field)
        .map(named_children)
        .unwrap_or_default()
}

/// First named, non-extra child.
pub(super) fn first_named<'t>(node: Node<'t>) -> Option<Node<'t>> {
    named_children(node).into_iter().next()
}

/// First named child whose native kind is one of `kinds`.
pub(super) fn first_of_kind<'t>(node: Node<'t>, kinds: &[&str]) -> Option<Node<'t>> {
    named_children(node)
        .into_iter()
        .find(|child| kinds.contains(&child.kind()))
}

/// Named children whose native kind is `kind`.
pub(super) fn children_of_kind<'t>(node: Node<'t>, kind: &str) -> Vec<Node<'t>> {
    named_children(node)
        .into_iter()
        .filter(|child| child.kind() == kind)
        .collect()
}

/// Native kinds that only wrap the node carrying the meaning.
const TRANSPARENT_KINDS: [&str; 2] = ["expression_statement", "error_suppression_expression"];

/// Innermost node under any number of transparent wrappers.
pub(super) fn unwrap_transparent(mut node: Node<'_>) -> Node<'_> {
    while TRANSPARENT_KINDS.contains(&node.kind()) {
        match first_named(node) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Lowercased keyword of a bare `die` or `exit` used without operand,
/// which parses as a plain name.
pub(super) fn bare_exit(node: Node<'_>, source: SourceView<'_>) -> Option<String> {
    if node.kind() != "name" {
        return None;
    }
    let keyword = source.text(node).to_ascii_lowercase();
    matches!(keyword.as_str(), "die" | "exit").then_some(keyword)
}

/// Strip any number of enclosing parentheses.
pub(super) fn unparenthesize(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "parenthesized_expression" {
        match first_named(node) {
            Some(inner) => node = inner,
            None => break,
        }
    }
    node
}

/// Flatten a comma sequence (`a, b, c`) into its elements. Any other node
/// is a sequence of one.
pub(super) fn flatten_sequence(node: Node<'_>) -> Vec<Node<'_>> {
    if node.kind() != "sequence_expression" {
        return vec![node];
    }
    named_children(node)
        .into_iter()
        .flat_map(flatten_sequence)
        .collect()
}

/// Lowercased source text of the callee of a function call, when it is a
/// plain name.
pub(super) fn callee_name(node: Node<'_>, source: SourceView<'_>) -> Option<String> {
    let function = node.child_by_field_name("function")?;
    (function.kind() == "name").then(|| source.text(function).to_ascii_lowercase())
}

/// First argument expression of a call, unwrapped from its `argument` node.
pub(super) fn first_argument<'t>(node: Node<'t>) -> Option<Node<'t>> {
    let arguments = node.child_by_field_name("arguments")?;
    let argument = first_named(arguments)?;
    if argument.kind() == "argument" {
        first_named(argument)
    } else {
        Some(argument)
    }
}

/// Comma-join the verbatim source text of `nodes`.
pub(super) fn join_text(nodes: &[Node<'_>], source: SourceView<'_>) -> String {
    nodes
        .iter()
        .map(|node| source.text(*node))
        .collect::<Vec<_>>()
        .join(",")
}
