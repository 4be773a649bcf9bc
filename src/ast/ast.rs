use std::fmt::Display;

use crate::{Position, Span};

use super::{
    expressions::{ChainExpr, LiteralExpr, SymbolExpr},
    types::Literals,
    statements::{AssignmentStmt, PrintLiteralStmt, PrintVariableStmt, VarDeclStmt},
};

/// Statement
///
/// One node per source statement. Created by the parser, consumed once by the
/// code generator, never mutated in between.
#[derive(Debug, Clone)]
pub enum Stmt {
    PrintLiteral(PrintLiteralStmt),
    PrintVariable(PrintVariableStmt),
    VarDecl(VarDeclStmt),
    Assignment(AssignmentStmt),
}

impl Stmt {
    /// Returns the span of the statement.
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::PrintLiteral(stmt) => &stmt.span,
            Stmt::PrintVariable(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::Assignment(stmt) => &stmt.span,
        }
    }

    /// Returns the position of the first character of the statement.
    pub fn get_position(&self) -> Position {
        self.get_span().start.clone()
    }
}

/// Right-hand side of a declaration or assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Chain(ChainExpr),
}

impl Display for Value {
    /// Writes the value back in Vyrn syntax, strings re-quoted with `"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Literal(literal) if literal.literal_type == Literals::String => {
                write!(f, "\"{}\"", literal.text)
            }
            Value::Literal(literal) => write!(f, "{}", literal.text),
            Value::Symbol(symbol) => write!(f, "{}", symbol.value),
            Value::Chain(chain) => {
                let separator = format!(" {} ", chain.operator);
                write!(f, "{}", chain.operands.join(&separator))
            }
        }
    }
}
