use std::io::Write as _;

use super::*;

#[test]
fn test_options_default() {
    let options = ConvertOptions::default();
    assert_eq!(options.dialect, Dialect::Php);
    assert!(!options.report_unrecognized);
    assert_eq!(options.error_position, ErrorPositionStyle::Offset);
}

#[test]
fn test_options_for_dialect_name() {
    let options = ConvertOptions::for_dialect_name("php-only").unwrap();
    assert_eq!(options.dialect, Dialect::PhpOnly);

    let err = ConvertOptions::for_dialect_name("php5").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidDialect(_)));
    assert!(err.to_string().contains("php5"));
}

#[test]
fn test_file_is_named_after_input() {
    let file = convert(b"<?php echo 1;", "views/index.php", &ConvertOptions::default()).unwrap();
    assert_eq!(file.name, "views/index.php");
    assert!(!file.parsing_errors_detected);
}

#[test]
fn test_convert_path_uses_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.php");
    let mut out = std::fs::File::create(&path).unwrap();
    out.write_all(b"<?php\necho 'hi';\n").unwrap();
    drop(out);

    let file = convert_path(&path, &ConvertOptions::default()).unwrap();
    assert_eq!(file.name, "hello.php");
    assert!(file.children.iter().any(|n| n.kind == NodeKind::Echo));
}

#[test]
fn test_convert_path_missing_file() {
    let err = convert_path("/nonexistent/missing.php", &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ConvertError::Io(_)));
}

#[test]
fn test_convert_many_keeps_input_order() {
    let inputs = vec![
        ("a.php", "<?php class A {}"),
        ("b.php", "<?php function b() {}"),
        ("c.php", "<?php $c = 1;"),
    ];
    let results = convert_many(&inputs, &ConvertOptions::default());
    let names: Vec<String> = results
        .iter()
        .map(|result| result.as_ref().unwrap().name.to_string())
        .collect();
    assert_eq!(names, vec!["a.php", "b.php", "c.php"]);

    let kinds: Vec<NodeKind> = results
        .iter()
        .map(|result| result.as_ref().unwrap().children.last().unwrap().kind)
        .collect();
    assert_eq!(kinds, vec![NodeKind::Class, NodeKind::Function, NodeKind::Assign]);
}

#[test]
fn test_convert_many_matches_sequential() {
    let inputs: Vec<(String, Vec<u8>)> = (0..16)
        .map(|i| (format!("f{i}.php"), format!("<?php\n$v{i} = {i};\n").into_bytes()))
        .collect();
    let options = ConvertOptions::default();
    let parallel = convert_many(&inputs, &options);
    for ((name, source), result) in inputs.iter().zip(parallel) {
        assert_eq!(result.unwrap(), convert(source, name, &options).unwrap());
    }
}
