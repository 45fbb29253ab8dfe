//! Structural assertions over converted files.

use php_semantic::{File, Node};

/// Assert the file's children tile `[0, source_len)` at every level.
pub fn assert_tiles(file: &File, source_len: usize) {
    if let Err(e) = file.check_tiling(source_len) {
        panic!("tiling violated in '{}': {e}\n{file:#?}", file.name);
    }
}

/// Assert every span, header and footer lies inside the buffer and inside
/// its parent.
pub fn assert_spans_nested(file: &File, source_len: usize) {
    for child in &file.children {
        assert!(child.span.end() <= source_len, "{:?} past end of buffer", child.span);
        assert_node_nested(child);
    }
}

fn assert_node_nested(node: &Node) {
    for boundary in [node.header_span, node.footer_span].into_iter().flatten() {
        assert!(
            node.span.contains_span(&boundary),
            "{} {:?}: boundary {boundary:?} outside node",
            node.kind,
            node.span
        );
    }
    for child in &node.children {
        assert!(
            node.span.contains_span(&child.span),
            "{} {:?}: child {} {:?} outside parent",
            node.kind,
            node.span,
            child.kind,
            child.span
        );
        assert_node_nested(child);
    }
}

/// Compare two trees and report the first differing node by path.
pub fn assert_same_tree(actual: &File, expected: &File) {
    assert_eq!(actual.name, expected.name, "file name");
    assert_eq!(
        actual.parsing_errors_detected, expected.parsing_errors_detected,
        "parsingErrorsDetected of '{}'",
        actual.name
    );
    assert_same_children(&actual.children, &expected.children, "children");
}

fn assert_same_children(actual: &[Node], expected: &[Node], path: &str) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let path = format!("{path}[{i}]");
        assert_eq!(a.kind, e.kind, "{path}.kind");
        assert_eq!(a.name, e.name, "{path}.name");
        assert_eq!(a.span, e.span, "{path}.span");
        assert_eq!(a.header_span, e.header_span, "{path}.headerSpan");
        assert_eq!(a.footer_span, e.footer_span, "{path}.footerSpan");
        assert_same_children(&a.children, &e.children, &format!("{path}.children"));
    }
    assert_eq!(
        actual.len(),
        expected.len(),
        "{path}: number of nodes differs\nactual: {actual:#?}"
    );
}
