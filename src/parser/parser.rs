//! Parser implementation for building the statement list.
//!
//! The source is first split into statement fragments by the lexer. Each
//! fragment is then matched against the statement grammar in
//! [`STMT_LOOKUP`](super::lookups::STMT_LOOKUP), in priority order:
//!
//! - `print("...")` / `print('...')`
//! - `print(identifier)`
//! - `let [type] name = value`
//! - `const [type] name = value`
//! - `name = value`
//!
//! Parsing is fail-fast: the first fragment that matches no rule, or whose
//! value cannot be classified, aborts the whole parse.

use log::debug;

use crate::{
    ast::ast::Stmt,
    errors::errors::Error,
    lexer::{lexer::split_statements, tokens::Fragment},
    MK_ERROR,
};

use super::lookups::STMT_LOOKUP;

/// Parses one statement fragment.
///
/// # Returns
///
/// The statement produced by the first rule that accepts the fragment, or
/// `SyntaxError: Unknown or invalid command` when none does.
pub fn parse_stmt(fragment: &Fragment) -> Result<Stmt, Error> {
    for rule in STMT_LOOKUP.iter() {
        if let Some(captures) = rule.regex.captures(&fragment.text) {
            if let Some(stmt) = (rule.handler)(fragment, &captures)? {
                debug!(
                    "{} rule matched `{}` ({}..{})",
                    rule.name, fragment.text, fragment.span.start.0, fragment.span.end.0
                );
                return Ok(stmt);
            }
        }
    }

    Err(MK_ERROR!(
        UnknownCommand,
        fragment.span.start.clone(),
        statement: fragment.text.clone()
    ))
}

/// Parses a whole program.
///
/// # Arguments
///
/// * `source` - The Vyrn source text
/// * `file` - Name used in positions; defaults to `shell`
///
/// # Returns
///
/// The statements in source order, or the first error encountered.
pub fn parse(source: &str, file: Option<String>) -> Result<Vec<Stmt>, Error> {
    split_statements(source, file)
        .iter()
        .map(parse_stmt)
        .collect()
}
