use crate::{
    ast::{
        ast::Value,
        expressions::{ChainExpr, LiteralExpr},
        types::Literals,
    },
    errors::errors::Error,
    type_checker::resolver::{resolve_chain, Emission, OperandSource, ResolvedOperand},
    Position, MK_ERROR,
};

use super::{compiler::Compiler, names::BindingNames};

/// Quotes text as a C++ string literal.
///
/// Only `\` and `"` need escaping: statements never contain line breaks.
pub fn escape_cpp_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('"');
    for character in text.chars() {
        match character {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(character),
        }
    }
    escaped.push('"');
    escaped
}

pub fn gen_literal(literal: &LiteralExpr) -> String {
    match literal.literal_type {
        Literals::String => escape_cpp_string(&literal.text),
        Literals::Boolean => {
            if literal.text.eq_ignore_ascii_case("true") {
                String::from("true")
            } else {
                String::from("false")
            }
        }
        Literals::Int => decimal_int(&literal.text),
        Literals::Float => literal.text.clone(),
    }
}

/// Strips leading zeros so C++ never reads an integer literal as octal.
pub fn decimal_int(text: &str) -> String {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text),
    };

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        String::from("0")
    } else {
        format!("{}{}", sign, digits)
    }
}

fn gen_operand(operand: &ResolvedOperand, names: &BindingNames) -> String {
    let text = match &operand.source {
        OperandSource::Literal(literal) => gen_literal(literal),
        OperandSource::Variable(name) => names.resolve(name),
    };

    match operand.emission {
        Emission::Plain => text,
        Emission::StdString => format!("std::string({})", text),
        Emission::Stringify => format!("vyrn_to_string({})", text),
        Emission::ToFloat => format!("static_cast<double>({})", text),
    }
}

pub fn gen_chain(
    compiler: &Compiler,
    chain: &ChainExpr,
    position: &Position,
) -> Result<(String, Literals), Error> {
    let resolved = resolve_chain(chain, &compiler.environment, position)?;

    let separator = format!(" {} ", resolved.operator);
    let expression = resolved
        .operands
        .iter()
        .map(|operand| gen_operand(operand, &compiler.names))
        .collect::<Vec<_>>()
        .join(&separator);

    Ok((expression, resolved.result_type))
}

/// Renders a declaration or assignment value and reports its type.
///
/// A reference is read from the variables first, then the constants. The
/// generated code copies its current value.
pub fn gen_value(
    compiler: &Compiler,
    value: &Value,
    position: &Position,
) -> Result<(String, Literals), Error> {
    match value {
        Value::Literal(literal) => Ok((gen_literal(literal), literal.literal_type)),
        Value::Symbol(symbol) => match compiler.environment.lookup(&symbol.value) {
            Some(symbol_type) => Ok((compiler.names.resolve(&symbol.value), symbol_type)),
            None => Err(MK_ERROR!(
                ReferenceNotDeclared,
                position.clone(),
                variable: symbol.value.clone()
            )),
        },
        Value::Chain(chain) => gen_chain(compiler, chain, position),
    }
}
