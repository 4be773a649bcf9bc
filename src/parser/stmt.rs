use regex::Captures;

use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, PrintLiteralStmt, PrintVariableStmt, VarDeclStmt},
        types::Literals,
    },
    errors::errors::Error,
    lexer::tokens::{is_reserved, Fragment},
    MK_ERROR,
};

use super::classifier::{classify, quoted_string};

pub fn parse_print_literal_stmt(fragment: &Fragment, captures: &Captures) -> Result<Option<Stmt>, Error> {
    let quoted = &captures[1];

    // `print("a" + "b")` matches the pattern but is not a single literal
    let Some(text) = quoted_string(quoted) else {
        return Ok(None);
    };

    Ok(Some(Stmt::PrintLiteral(PrintLiteralStmt {
        text: text.to_string(),
        span: fragment.span.clone(),
    })))
}

pub fn parse_print_variable_stmt(fragment: &Fragment, captures: &Captures) -> Result<Option<Stmt>, Error> {
    Ok(Some(Stmt::PrintVariable(PrintVariableStmt {
        identifier: captures[1].to_string(),
        span: fragment.span.clone(),
    })))
}

pub fn parse_var_decl_stmt(fragment: &Fragment, captures: &Captures) -> Result<Option<Stmt>, Error> {
    let is_constant = fragment.text.starts_with("const");

    let explicit_type = match captures.get(1) {
        Some(annotation) => match Literals::from_keyword(annotation.as_str()) {
            Some(literal_type) => Some(literal_type),
            None => {
                return Err(MK_ERROR!(
                    UnknownType,
                    fragment.position_at(annotation.start()),
                    type_: annotation.as_str().to_string()
                ))
            }
        },
        None => None,
    };

    let identifier = &captures[2];
    check_binding_name(fragment, captures, 2)?;

    let value = captures.get(3).map_or("", |value| value.as_str());
    let value_start = captures.get(3).map_or(0, |value| value.start());
    let assigned_value = classify(value, fragment.position_at(value_start + leading_whitespace(value)))?;

    Ok(Some(Stmt::VarDecl(VarDeclStmt {
        is_constant,
        identifier: identifier.to_string(),
        explicit_type,
        assigned_value,
        span: fragment.span.clone(),
    })))
}

pub fn parse_assignment_stmt(fragment: &Fragment, captures: &Captures) -> Result<Option<Stmt>, Error> {
    check_binding_name(fragment, captures, 1)?;

    let value = captures.get(2).map_or("", |value| value.as_str());
    let value_start = captures.get(2).map_or(0, |value| value.start());
    let value = classify(value, fragment.position_at(value_start + leading_whitespace(value)))?;

    Ok(Some(Stmt::Assignment(AssignmentStmt {
        assignee: captures[1].to_string(),
        value,
        span: fragment.span.clone(),
    })))
}

fn check_binding_name(fragment: &Fragment, captures: &Captures, group: usize) -> Result<(), Error> {
    if let Some(name) = captures.get(group) {
        if is_reserved(name.as_str()) {
            return Err(MK_ERROR!(
                ReservedName,
                fragment.position_at(name.start()),
                name: name.as_str().to_string()
            ));
        }
    }
    Ok(())
}

fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}
