use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::Fragment};

use super::stmt::*;

/// A handler returns `Ok(None)` when its pattern matched but the statement
/// still belongs to a later rule.
pub type StmtHandler = fn(&Fragment, &Captures) -> Result<Option<Stmt>, Error>;

pub struct StmtRule {
    pub name: &'static str,
    pub regex: Regex,
    pub handler: StmtHandler,
}

lazy_static! {
    /// Statement grammar, in priority order.
    pub static ref STMT_LOOKUP: Vec<StmtRule> = vec![
        StmtRule {
            name: "print-literal",
            regex: Regex::new(r#"(?s)^print\s*\(\s*(".*"|'.*')\s*\)$"#).unwrap(),
            handler: parse_print_literal_stmt,
        },
        StmtRule {
            name: "print-variable",
            regex: Regex::new(r"(?s)^print\s*\(\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\)$").unwrap(),
            handler: parse_print_variable_stmt,
        },
        StmtRule {
            name: "let",
            regex: Regex::new(r"(?s)^let\s+(?:([a-zA-Z_][a-zA-Z0-9_]*)\s+)?([a-zA-Z_][a-zA-Z0-9_]*)\s*=(.*)$").unwrap(),
            handler: parse_var_decl_stmt,
        },
        StmtRule {
            name: "const",
            regex: Regex::new(r"(?s)^const\s+(?:([a-zA-Z_][a-zA-Z0-9_]*)\s+)?([a-zA-Z_][a-zA-Z0-9_]*)\s*=(.*)$").unwrap(),
            handler: parse_var_decl_stmt,
        },
        StmtRule {
            name: "assign",
            regex: Regex::new(r"(?s)^([a-zA-Z_][a-zA-Z0-9_]*)\s*=(.*)$").unwrap(),
            handler: parse_assignment_stmt,
        },
    ];
}
