use crate::Span;

use super::{ast::Value, types::Literals};

/// `print("text")` or `print('text')`.
#[derive(Debug, Clone)]
pub struct PrintLiteralStmt {
    pub text: String,
    pub span: Span,
}

/// `print(name)`.
#[derive(Debug, Clone)]
pub struct PrintVariableStmt {
    pub identifier: String,
    pub span: Span,
}

/// `let name = value` or `const name = value`, optionally annotated as
/// `let int name = value`.
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub is_constant: bool,
    pub identifier: String,
    pub explicit_type: Option<Literals>,
    pub assigned_value: Value,
    pub span: Span,
}

/// `name = value`.
#[derive(Debug, Clone)]
pub struct AssignmentStmt {
    pub assignee: String,
    pub value: Value,
    pub span: Span,
}
