//! Operator-chain resolution.
//!
//! Given a chain such as `a / b / 2` and the current [`TypeEnvironment`],
//! works out every operand's type, the chain's result type and how each
//! operand has to be written in C++. This is a pure query: the environment
//! is only read.
//!
//! Promotion, in order:
//!
//! - any `string` operand: the operator must be `+`, result is `string`
//! - `/`: result is `float`, every operand is promoted first
//! - any `float` operand: result is `float`
//! - otherwise: `int`

use crate::{
    ast::{
        expressions::{ChainExpr, LiteralExpr, Operator},
        types::Literals,
    },
    errors::errors::Error,
    parser::classifier::classify_literal,
    Position, MK_ERROR,
};

use super::environment::TypeEnvironment;

/// How an operand is written into the generated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Written as-is.
    Plain,
    /// A string literal promoted to `std::string` so `+` concatenates.
    StdString,
    /// A non-string operand converted to its text for concatenation.
    Stringify,
    /// Promoted to `double` ahead of a division.
    ToFloat,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperandSource {
    Literal(LiteralExpr),
    Variable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOperand {
    pub source: OperandSource,
    pub operand_type: Literals,
    pub emission: Emission,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChain {
    pub result_type: Literals,
    pub operator: Operator,
    pub operands: Vec<ResolvedOperand>,
}

pub fn resolve_operand(
    operand: &str,
    environment: &TypeEnvironment,
    position: &Position,
) -> Result<(OperandSource, Literals), Error> {
    if let Some(operand_type) = environment.lookup(operand) {
        return Ok((OperandSource::Variable(operand.to_string()), operand_type));
    }

    match classify_literal(operand) {
        Some(literal) if literal.literal_type != Literals::Boolean => {
            let literal_type = literal.literal_type;
            Ok((OperandSource::Literal(literal), literal_type))
        }
        _ => Err(MK_ERROR!(UnrecognisedOperand, position.clone(), operand: operand.to_string())),
    }
}

pub fn resolve_chain(
    chain: &ChainExpr,
    environment: &TypeEnvironment,
    position: &Position,
) -> Result<ResolvedChain, Error> {
    if chain.operands.is_empty() {
        return Err(MK_ERROR!(EmptyExpression, position.clone()));
    }

    let typed = chain
        .operands
        .iter()
        .map(|operand| resolve_operand(operand, environment, position))
        .collect::<Result<Vec<_>, Error>>()?;

    let has_type = |wanted: Literals| typed.iter().any(|(_, operand_type)| *operand_type == wanted);

    let unsupported = |type_: Literals| {
        MK_ERROR!(
            UnsupportedOperation,
            position.clone(),
            operator: chain.operator.to_string(),
            type_: type_.to_string()
        )
    };

    let result_type = if has_type(Literals::String) {
        if chain.operator != Operator::Plus {
            return Err(unsupported(Literals::String));
        }
        Literals::String
    } else if has_type(Literals::Boolean) {
        return Err(unsupported(Literals::Boolean));
    } else if chain.operator == Operator::Slash || has_type(Literals::Float) {
        Literals::Float
    } else {
        Literals::Int
    };

    let operands = typed
        .into_iter()
        .map(|(source, operand_type)| {
            let emission = match (result_type, operand_type, &source) {
                (Literals::String, Literals::String, OperandSource::Literal(_)) => Emission::StdString,
                (Literals::String, Literals::String, OperandSource::Variable(_)) => Emission::Plain,
                (Literals::String, _, _) => Emission::Stringify,
                _ if chain.operator == Operator::Slash => Emission::ToFloat,
                _ => Emission::Plain,
            };

            ResolvedOperand {
                source,
                operand_type,
                emission,
            }
        })
        .collect();

    Ok(ResolvedChain {
        result_type,
        operator: chain.operator,
        operands,
    })
}
