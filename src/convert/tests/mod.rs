mod tests_entry;

use super::*;
use crate::parser::Dialect;
use crate::syntax::{File, Node, NodeKind};

/// Convert `source` with the given dialect, panicking on fatal errors.
fn convert_with(dialect: Dialect, source: &str) -> File {
    let options = ConvertOptions::default().with_dialect(dialect);
    convert(source.as_bytes(), "test.php", &options)
        .unwrap_or_else(|e| panic!("conversion failed: {e}"))
}

/// Convert pure PHP and check the file tiles the buffer.
fn convert_php(source: &str) -> File {
    let file = convert_with(Dialect::PhpOnly, source);
    if let Err(e) = file.check_tiling(source.len()) {
        panic!("tiling violated: {e}\n{file:#?}");
    }
    file
}

/// The first node of `kind` anywhere in the file.
fn find(file: &File, kind: NodeKind) -> &Node {
    file.descendants()
        .find(|node| node.kind == kind)
        .unwrap_or_else(|| panic!("no {kind} node in {file:#?}"))
}

/// The single top-level node of a one-statement source.
fn only_child(file: &File) -> &Node {
    assert_eq!(file.children.len(), 1, "{file:#?}");
    &file.children[0]
}
