//! Name extraction: a descriptive string for every recognized native node.
//!
//! Declarations yield their identifier, condition-bearing constructs the
//! verbatim condition, calls a rendered callee chain, lists a comma-joined
//! sequence of element names. Anything else yields the empty string.

use tree_sitter::Node;

use super::nodes::{
    bare_exit, callee_name, children_of_kind, first_argument, first_named, first_of_kind,
    flatten_sequence, join_text, named_children, unparenthesize,
};
use crate::base::SourceView;

/// Compute the name of a native node.
///
/// Recursion only ever descends into children, so it terminates on any
/// finite tree.
pub(super) fn name_of(node: Node<'_>, source: SourceView<'_>) -> String {
    match node.kind() {
        // Identifiers
        "name" | "qualified_name" | "namespace_name" => source.text(node).into_owned(),
        "variable_name" => variable_name(node, source),
        "subscript_expression"
        | "member_access_expression"
        | "nullsafe_member_access_expression"
        | "scoped_property_access_expression"
        | "list_literal" => source.text(node).into_owned(),

        // Transparent wrappers; a bare `die`/`exit` has no operand to name.
        "expression_statement" | "error_suppression_expression" => first_named(node)
            .filter(|inner| bare_exit(*inner, source).is_none())
            .map_or_else(String::new, |inner| name_of(inner, source)),

        // Declarations
        "class_declaration"
        | "interface_declaration"
        | "trait_declaration"
        | "enum_declaration"
        | "function_definition"
        | "method_declaration" => field_name(node, "name", source),
        "namespace_definition" => node
            .child_by_field_name("name")
            .map(|name| source.text(name).into_owned())
            .unwrap_or_default(),
        "property_declaration" => join_names(&children_of_kind(node, "property_element"), source),
        "property_element" => first_of_kind(node, &["variable_name"])
            .map_or_else(String::new, |var| name_of(var, source)),
        "const_declaration" => join_names(&children_of_kind(node, "const_element"), source),
        "const_element" | "named_label_statement" | "goto_statement" => {
            first_of_kind(node, &["name"]).map_or_else(String::new, |name| name_of(name, source))
        }
        "namespace_use_declaration" | "use_declaration" => use_names(node, source),

        // Conditions
        "if_statement" | "while_statement" | "do_statement" | "switch_statement" => {
            condition_text(node, "condition", source)
        }
        "conditional_expression" => condition_text(node, "condition", source),
        "for_statement" => for_clauses(node, source),
        "foreach_statement" => foreach_header(node, source),
        "catch_clause" => catch_types(node, source),

        // Lists
        "echo_statement" => {
            let exprs: Vec<_> = named_children(node)
                .into_iter()
                .flat_map(flatten_sequence)
                .collect();
            join_text(&exprs, source)
        }
        "unset_statement" | "global_declaration" => join_names(&named_children(node), source),

        // Assignments
        "assignment_expression"
        | "reference_assignment_expression"
        | "augmented_assignment_expression" => node
            .child_by_field_name("left")
            .map_or_else(String::new, |left| name_of(left, source)),

        // Calls
        "function_call_expression" => call_name(node, source),
        "member_call_expression" => member_call(node, "->", source),
        "nullsafe_member_call_expression" => member_call(node, "?->", source),
        "scoped_call_expression" => {
            let scope = node
                .child_by_field_name("scope")
                .map(|scope| source.text(scope).into_owned())
                .unwrap_or_default();
            format!("{scope}::{}", member_text(node, source))
        }

        // Constructs taking one expression
        "print_intrinsic"
        | "include_expression"
        | "include_once_expression"
        | "require_expression"
        | "require_once_expression"
        | "exit_statement" => operand_text(first_named(node), source),

        _ => String::new(),
    }
}

/// `$name` renders without the sigil; `$$name` keeps the inner variable.
fn variable_name(node: Node<'_>, source: SourceView<'_>) -> String {
    match first_named(node) {
        Some(inner) if inner.kind() == "name" => source.text(inner).into_owned(),
        Some(inner) => name_of(inner, source),
        None => source.text(node).trim_start_matches('$').to_string(),
    }
}

fn field_name(node: Node<'_>, field: &str, source: SourceView<'_>) -> String {
    node.child_by_field_name(field)
        .map_or_else(String::new, |child| name_of(child, source))
}

fn join_names(nodes: &[Node<'_>], source: SourceView<'_>) -> String {
    nodes
        .iter()
        .map(|node| name_of(*node, source))
        .collect::<Vec<_>>()
        .join(",")
}

fn condition_text(node: Node<'_>, field: &str, source: SourceView<'_>) -> String {
    node.child_by_field_name(field)
        .map(|cond| source.text(unparenthesize(cond)).into_owned())
        .unwrap_or_default()
}

fn operand_text(operand: Option<Node<'_>>, source: SourceView<'_>) -> String {
    operand
        .map(|expr| source.text(unparenthesize(expr)).into_owned())
        .unwrap_or_default()
}

/// `"<init>; <cond>; <update>"`, each clause a comma-joined expression list.
fn for_clauses(node: Node<'_>, source: SourceView<'_>) -> String {
    let mut clauses: [Vec<Node<'_>>; 3] = Default::default();
    let mut clause = 0;
    let mut opened = false;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "(" if !opened => opened = true,
            ")" if opened => break,
            ";" if opened => clause = (clause + 1).min(2),
            _ if opened && child.is_named() && !child.is_extra() => {
                clauses[clause].extend(flatten_sequence(child));
            }
            _ => {}
        }
    }

    clauses
        .iter()
        .map(|exprs| join_text(exprs, source))
        .collect::<Vec<_>>()
        .join("; ")
}

/// `"<iterated> as <binding>"`.
fn foreach_header(node: Node<'_>, source: SourceView<'_>) -> String {
    let mut subject = None;
    let mut binding = None;
    let mut seen_as = false;

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind().eq_ignore_ascii_case("as") {
            seen_as = true;
        } else if child.kind() == ")" {
            break;
        } else if child.is_named() && !child.is_extra() {
            if !seen_as && subject.is_none() {
                subject = Some(child);
            } else if seen_as && binding.is_none() {
                binding = Some(child);
            }
        }
    }

    format!(
        "{} as {}",
        text_or_empty(subject, source),
        text_or_empty(binding, source)
    )
}

fn text_or_empty(node: Option<Node<'_>>, source: SourceView<'_>) -> String {
    node.map(|n| source.text(n).into_owned()).unwrap_or_default()
}

/// Caught types, comma-joined.
fn catch_types(node: Node<'_>, source: SourceView<'_>) -> String {
    let mut cursor = node.walk();
    let types: Vec<_> = node
        .children_by_field_name("type", &mut cursor)
        .flat_map(|ty| {
            if ty.kind() == "type_list" {
                named_children(ty)
            } else {
                vec![ty]
            }
        })
        .collect();
    join_text(&types, source)
}

/// Imported names of a `use` declaration. Group imports expand against
/// their prefix: `use A\{B, C}` names `A\B,A\C`.
fn use_names(node: Node<'_>, source: SourceView<'_>) -> String {
    let mut prefix: Option<String> = None;
    let mut names = Vec::new();

    for child in named_children(node) {
        match child.kind() {
            "namespace_use_clause" => names.push(use_clause(child, source)),
            "namespace_name" | "name" | "qualified_name" => {
                prefix = Some(source.text(child).into_owned());
                names.push(source.text(child).into_owned());
            }
            "namespace_use_group" => {
                // The prefix was recorded as a name of its own; replace it.
                if prefix.is_some() {
                    names.pop();
                }
                for clause in named_children(child) {
                    let clause_name = use_clause(clause, source);
                    names.push(match &prefix {
                        Some(prefix) => format!("{prefix}\\{clause_name}"),
                        None => clause_name,
                    });
                }
            }
            _ => {}
        }
    }
    names.join(",")
}

fn use_clause(clause: Node<'_>, source: SourceView<'_>) -> String {
    first_of_kind(clause, &["qualified_name", "name", "namespace_name"])
        .map_or_else(|| source.text(clause).into_owned(), |name| source.text(name).into_owned())
}

/// Plain calls name their callee; `die`/`exit` name their argument.
fn call_name(node: Node<'_>, source: SourceView<'_>) -> String {
    match callee_name(node, source).as_deref() {
        Some("die" | "exit") => operand_text(first_argument(node), source),
        Some("__halt_compiler") => String::new(),
        _ => field_name(node, "function", source),
    }
}

fn member_call(node: Node<'_>, operator: &str, source: SourceView<'_>) -> String {
    let object = node
        .child_by_field_name("object")
        .map(|object| source.text(object).into_owned())
        .unwrap_or_default();
    format!("{object}{operator}{}", member_text(node, source))
}

fn member_text(node: Node<'_>, source: SourceView<'_>) -> String {
    node.child_by_field_name("name")
        .map(|name| source.text(name).into_owned())
        .unwrap_or_default()
}
