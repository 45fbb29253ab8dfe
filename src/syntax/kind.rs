//! Generic, language-agnostic node kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse kind tag of an output node.
///
/// Serialized as the snake_case tag downstream tools match on
/// (`call_method`, `require_once`, `statement_list`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Leading file content no statement covers (opening tag, shebang)
    Header,

    // Declarations
    Class,
    Interface,
    Trait,
    Enum,
    Namespace,
    Function,
    Method,
    Properties,
    Constant,
    Use,
    Label,

    // Control flow
    If,
    For,
    Foreach,
    While,
    Do,
    Switch,
    Try,
    Catch,
    Finally,
    Goto,
    StatementList,

    // Expressions
    Assign,
    Concat,
    Ternary,
    CallFunction,
    CallMethod,
    CallStatic,

    // Language constructs
    Echo,
    Print,
    Require,
    RequireOnce,
    Include,
    IncludeOnce,
    Global,
    Unset,
    Die,
    Exit,
    InlineText,
    HaltCompiler,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Header => "header",
            NodeKind::Class => "class",
            NodeKind::Interface => "interface",
            NodeKind::Trait => "trait",
            NodeKind::Enum => "enum",
            NodeKind::Namespace => "namespace",
            NodeKind::Function => "function",
            NodeKind::Method => "method",
            NodeKind::Properties => "properties",
            NodeKind::Constant => "constant",
            NodeKind::Use => "use",
            NodeKind::Label => "label",
            NodeKind::If => "if",
            NodeKind::For => "for",
            NodeKind::Foreach => "foreach",
            NodeKind::While => "while",
            NodeKind::Do => "do",
            NodeKind::Switch => "switch",
            NodeKind::Try => "try",
            NodeKind::Catch => "catch",
            NodeKind::Finally => "finally",
            NodeKind::Goto => "goto",
            NodeKind::StatementList => "statement_list",
            NodeKind::Assign => "assign",
            NodeKind::Concat => "concat",
            NodeKind::Ternary => "ternary",
            NodeKind::CallFunction => "call_function",
            NodeKind::CallMethod => "call_method",
            NodeKind::CallStatic => "call_static",
            NodeKind::Echo => "echo",
            NodeKind::Print => "print",
            NodeKind::Require => "require",
            NodeKind::RequireOnce => "require_once",
            NodeKind::Include => "include",
            NodeKind::IncludeOnce => "include_once",
            NodeKind::Global => "global",
            NodeKind::Unset => "unset",
            NodeKind::Die => "die",
            NodeKind::Exit => "exit",
            NodeKind::InlineText => "inline_text",
            NodeKind::HaltCompiler => "halt_compiler",
        }
    }

    /// Kinds whose output nodes may carry children and therefore
    /// header/footer spans.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            NodeKind::Class
                | NodeKind::Interface
                | NodeKind::Trait
                | NodeKind::Enum
                | NodeKind::Namespace
                | NodeKind::Try
                | NodeKind::StatementList
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
