//! Node classification: native node → generic kind and children to recurse into.

use tree_sitter::Node;

use super::nodes::{bare_exit, body_children, callee_name, first_named, named_children};
use crate::base::SourceView;
use crate::syntax::NodeKind;

/// A native node the classifier recognized.
#[derive(Debug, Clone)]
pub struct Classified<'t> {
    pub kind: NodeKind,
    /// The node the name is read from. Differs from the classified node
    /// when transparent wrappers were unwrapped.
    pub target: Node<'t>,
    /// Native children to convert, in source order.
    pub children: Vec<Node<'t>>,
}

impl<'t> Classified<'t> {
    fn leaf(kind: NodeKind, target: Node<'t>) -> Self {
        Self {
            kind,
            target,
            children: Vec::new(),
        }
    }

    fn container(kind: NodeKind, target: Node<'t>, children: Vec<Node<'t>>) -> Self {
        Self {
            kind,
            target,
            children,
        }
    }
}

/// Classify a statement or expression shared by every dialect.
///
/// Expression statements and `@` error suppression are transparent: the
/// wrapped expression is classified instead, except a bare `die`/`exit`
/// keyword, which only the wrapper identifies. Returns `None` for anything
/// the table does not cover (punctuation, comments, unmapped constructs).
pub(super) fn classify_common<'t>(node: Node<'t>, source: SourceView<'_>) -> Option<Classified<'t>> {
    let kind = match node.kind() {
        "expression_statement" | "error_suppression_expression" => {
            let inner = first_named(node)?;
            return match bare_exit(inner, source).as_deref() {
                Some("die") => Some(Classified::leaf(NodeKind::Die, node)),
                Some(_) => Some(Classified::leaf(NodeKind::Exit, node)),
                None => classify_common(inner, source),
            };
        }

        // Containers
        "class_declaration" => return Some(declaration_body(NodeKind::Class, node)),
        "interface_declaration" => return Some(declaration_body(NodeKind::Interface, node)),
        "trait_declaration" => return Some(declaration_body(NodeKind::Trait, node)),
        "enum_declaration" => return Some(declaration_body(NodeKind::Enum, node)),
        "namespace_definition" => return Some(declaration_body(NodeKind::Namespace, node)),
        "compound_statement" => {
            return Some(Classified::container(
                NodeKind::StatementList,
                node,
                named_children(node),
            ));
        }
        "try_statement" => return Some(try_statement(node)),

        // Declarations
        "function_definition" => NodeKind::Function,
        "method_declaration" => NodeKind::Method,
        "property_declaration" => NodeKind::Properties,
        "const_declaration" => NodeKind::Constant,
        "namespace_use_declaration" | "use_declaration" => NodeKind::Use,
        "named_label_statement" => NodeKind::Label,

        // Control flow
        "if_statement" => NodeKind::If,
        "for_statement" => NodeKind::For,
        "foreach_statement" => NodeKind::Foreach,
        "while_statement" => NodeKind::While,
        "do_statement" => NodeKind::Do,
        "switch_statement" => NodeKind::Switch,
        "catch_clause" => NodeKind::Catch,
        "finally_clause" => NodeKind::Finally,
        "goto_statement" => NodeKind::Goto,

        // Language constructs
        "echo_statement" => NodeKind::Echo,
        "unset_statement" => NodeKind::Unset,
        "global_declaration" => NodeKind::Global,
        "print_intrinsic" => NodeKind::Print,
        "include_expression" => NodeKind::Include,
        "include_once_expression" => NodeKind::IncludeOnce,
        "require_expression" => NodeKind::Require,
        "require_once_expression" => NodeKind::RequireOnce,
        "exit_statement" => exit_kind(node, source),

        // Expressions
        "assignment_expression" | "reference_assignment_expression" => NodeKind::Assign,
        "augmented_assignment_expression" => augmented_kind(node),
        "conditional_expression" => NodeKind::Ternary,
        "function_call_expression" => call_kind(node, source),
        "member_call_expression" | "nullsafe_member_call_expression" => NodeKind::CallMethod,
        "scoped_call_expression" => NodeKind::CallStatic,

        _ => return None,
    };
    Some(Classified::leaf(kind, node))
}

/// Declarations whose members live in a `body` field.
fn declaration_body(kind: NodeKind, node: Node<'_>) -> Classified<'_> {
    Classified::container(kind, node, body_children(node, "body"))
}

/// `try` children: the guarded block, each `catch`, then `finally`.
fn try_statement(node: Node<'_>) -> Classified<'_> {
    let children = named_children(node)
        .into_iter()
        .filter(|child| {
            matches!(
                child.kind(),
                "compound_statement" | "catch_clause" | "finally_clause"
            )
        })
        .collect();
    Classified::container(NodeKind::Try, node, children)
}

/// `die` and `exit` are the same construct under two keywords.
fn exit_kind(node: Node<'_>, source: SourceView<'_>) -> NodeKind {
    if source.text(node).trim_start().to_ascii_lowercase().starts_with("die") {
        NodeKind::Die
    } else {
        NodeKind::Exit
    }
}

fn augmented_kind(node: Node<'_>) -> NodeKind {
    let mut cursor = node.walk();
    let is_concat = node.children(&mut cursor).any(|child| child.kind() == ".=");
    if is_concat {
        NodeKind::Concat
    } else {
        NodeKind::Assign
    }
}

/// Calls to `die`, `exit` and `__halt_compiler` parse as plain calls but
/// are language constructs.
fn call_kind(node: Node<'_>, source: SourceView<'_>) -> NodeKind {
    match callee_name(node, source).as_deref() {
        Some("die") => NodeKind::Die,
        Some("exit") => NodeKind::Exit,
        Some("__halt_compiler") => NodeKind::HaltCompiler,
        _ => NodeKind::CallFunction,
    }
}
