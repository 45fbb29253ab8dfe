//! Invariants that hold for every conversion, checked over all snippets
//! and a set of edge-case sources.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::snippets::{php_snippets, read, snippets_dir};
use helpers::tree_assertions::{assert_spans_nested, assert_tiles};
use php_semantic::{
    ConvertOptions, Dialect, ErrorPosition, ErrorPositionStyle, NodeKind, convert, convert_many,
    convert_path,
};
use rstest::rstest;

fn options(dialect: Dialect) -> ConvertOptions {
    ConvertOptions::default().with_dialect(dialect)
}

#[test]
fn test_every_snippet_tiles_in_both_dialects() {
    for path in php_snippets() {
        let source = read(&path);
        for dialect in Dialect::ALL {
            let file = convert(&source, "snippet", &options(dialect)).unwrap();
            assert_tiles(&file, source.len());
            assert_spans_nested(&file, source.len());
        }
    }
}

#[test]
fn test_conversion_is_idempotent() {
    for path in php_snippets() {
        let source = read(&path);
        let first = convert(&source, "again", &ConvertOptions::default()).unwrap();
        let second = convert(&source, "again", &ConvertOptions::default()).unwrap();
        assert_eq!(first, second, "{}", path.display());
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}

#[test]
fn test_splat_snippet() {
    let file = convert_path(snippets_dir().join("splat.php"), &ConvertOptions::default()).unwrap();
    assert_eq!(file.name, "splat.php");

    // `@$loc = func();` is left out: grammar revisions disagree on it.
    let expected = [
        (NodeKind::Header, ""),
        (NodeKind::Constant, "NAME"),
        (NodeKind::RequireOnce, "'header.php'"),
        (NodeKind::Require, "'functions.php'"),
        (NodeKind::Namespace, "Something"),
        (NodeKind::Use, "Nothing"),
        (NodeKind::Global, "hello"),
        (NodeKind::Assign, "$hello[NAME]"),
        (NodeKind::If, "$hello"),
        (NodeKind::Function, "func"),
        (NodeKind::Assign, "here"),
        (NodeKind::Foreach, "$loc as $l"),
        (NodeKind::For, "$i = 0; $i < 10; $i++"),
        (NodeKind::CallMethod, "$here->where"),
        (NodeKind::CallFunction, "print_footer"),
    ];
    let mut actual = file.children.iter().map(|n| (n.kind, n.name.as_str()));
    for want in expected {
        assert!(
            actual.any(|got| got == want),
            "{want:?} missing or out of order in {:#?}",
            file.children
        );
    }
}

#[test]
fn test_splat_header_stops_at_blank_line() {
    let file = convert_path(snippets_dir().join("splat.php"), &ConvertOptions::default()).unwrap();
    // "<?php\n\n": the header ends after the first newline of the blank line.
    assert_eq!(file.children[0].span.as_range(), 0..6);
}

#[rstest]
#[case::empty("")]
#[case::only_open_tag("<?php")]
#[case::only_text("<p>plain</p>\n")]
#[case::only_comments("<?php\n// a\n# b\n/* c */\n")]
#[case::shebang("#!/usr/bin/env php\n<?php\necho 1;\n")]
#[case::close_tag("<?php echo 1; ?>\ntrailing\n<?php echo 2;")]
#[case::alternate_syntax("<?php\nif ($a):\n  echo 1;\nendif;\n")]
#[case::unterminated_comment("<?php\nclass A { /* open\n")]
#[case::unbalanced_braces("<?php\nclass A {\n  function f() {\n")]
#[case::stray_close("<?php\n}\n$a = 1;\n")]
#[case::crlf("<?php\r\nclass A {\r\n  function f() {}\r\n}\r\n")]
#[case::latin1("<?php\n$s = 'caf\u{e9}';\n")]
fn test_edge_case_sources_tile(#[case] source: &str) {
    for dialect in Dialect::ALL {
        let file = convert(source.as_bytes(), "edge.php", &options(dialect)).unwrap();
        assert_tiles(&file, source.len());
        assert_spans_nested(&file, source.len());
    }
}

#[test]
fn test_non_utf8_source_tiles() {
    let source = b"<?php\n$s = 'caf\xe9';\nclass A { function f() {} }\n";
    let file = convert(source, "latin1.php", &ConvertOptions::default()).unwrap();
    assert_tiles(&file, source.len());
}

#[test]
fn test_empty_source_has_no_children_and_no_errors() {
    for dialect in Dialect::ALL {
        let file = convert(b"", "empty.php", &options(dialect)).unwrap();
        assert!(file.children.is_empty());
        assert!(!file.parsing_errors_detected);
        assert!(file.parsing_error.is_none());
    }
}

#[test]
fn test_syntax_error_is_reported_not_fatal() {
    let source = b"<?php\nfunction ok() {}\n$x = ;\n";
    let file = convert(source, "bad.php", &ConvertOptions::default()).unwrap();
    assert!(file.parsing_errors_detected);
    let error = file.parsing_error.as_ref().unwrap();
    match error.position {
        ErrorPosition::Offset(offset) => assert!((offset as usize) < source.len()),
        other => panic!("expected an offset, got {other:?}"),
    }
    assert_tiles(&file, source.len());
}

#[test]
fn test_syntax_error_line_column() {
    let source = b"<?php\nfunction ok() {}\n$x = ;\n";
    let options = ConvertOptions::default().with_error_position(ErrorPositionStyle::LineColumn);
    let file = convert(source, "bad.php", &options).unwrap();
    match file.parsing_error.unwrap().position {
        ErrorPosition::LineColumn { line, column } => {
            assert_eq!(line, 3);
            assert!(column >= 1);
        }
        other => panic!("expected a line/column, got {other:?}"),
    }
}

#[test]
fn test_comment_brace_does_not_cut_header() {
    let source = "<?php\n/* { */ class A { function f(){} }\n";
    let file = convert(source.as_bytes(), "comment.php", &ConvertOptions::default()).unwrap();
    let class = file
        .children
        .iter()
        .find(|n| n.kind == NodeKind::Class)
        .unwrap();
    let header = class.header_span.unwrap();
    assert_eq!(&source[header.as_range()], "class A {");
}

#[test]
fn test_attribute_string_brace_does_not_cut_header() {
    let source = "<?php\n#[Route('/blog/{slug}')]\nclass C {\n    function f() {}\n}\n";
    let file = convert(source.as_bytes(), "route.php", &ConvertOptions::default()).unwrap();
    assert_tiles(&file, source.len());
    let class = file
        .children
        .iter()
        .find(|n| n.kind == NodeKind::Class)
        .unwrap();
    let header = &source[class.header_span.unwrap().as_range()];
    assert!(header.ends_with("class C {"), "header: {header:?}");
    let method = &source[class.children[0].span.as_range()];
    assert_eq!(method, "\n    function f() {}\n");
}

#[test]
fn test_brace_on_next_line_stays_in_header() {
    let source = "<?php\nclass A\n{\n    function f() {}\n}\n";
    let file = convert(source.as_bytes(), "alt.php", &ConvertOptions::default()).unwrap();
    let class = &file.children[1];
    let header = class.header_span.unwrap();
    assert_eq!(&source[header.as_range()], "class A\n{");
}

#[test]
fn test_header_without_brace_falls_back_to_newline() {
    // The try block's brace belongs to its statement list, so the try
    // header can only reach the end of its line.
    let source = "<?php\ntry\n{\n    f();\n}\nfinally {}\n";
    let file = convert(source.as_bytes(), "fallback.php", &ConvertOptions::default()).unwrap();
    assert_tiles(&file, source.len());
    let node = &file.children[1];
    assert_eq!(node.kind, NodeKind::Try);
    let header = node.header_span.unwrap();
    assert_eq!(&source[header.as_range()], "try\n");
}

#[test]
fn test_parallel_matches_sequential() {
    let inputs: Vec<(String, Vec<u8>)> = php_snippets()
        .into_iter()
        .map(|path| (path.display().to_string(), read(&path)))
        .collect();
    let options = ConvertOptions::default();
    let parallel = convert_many(&inputs, &options);
    assert_eq!(parallel.len(), inputs.len());
    for ((name, source), result) in inputs.iter().zip(parallel) {
        assert_eq!(result.unwrap(), convert(source, name, &options).unwrap());
    }
}

#[test]
fn test_json_output_schema() {
    let file = convert(
        b"<?php\nclass A {\n  function f() {}\n}\n",
        "schema.php",
        &ConvertOptions::default(),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&file.to_json().unwrap()).unwrap();
    assert_eq!(value["kind"], "file");
    assert_eq!(value["name"], "schema.php");
    assert_eq!(value["parsingErrorsDetected"], false);
    assert!(value.get("parsingError").is_none());

    let class = &value["children"][1];
    assert_eq!(class["kind"], "class");
    assert_eq!(class["span"], serde_json::json!([6, 36]));
    assert!(class["headerSpan"].is_array());
    assert!(class["footerSpan"].is_array());
    assert_eq!(class["children"][0]["kind"], "method");
}
