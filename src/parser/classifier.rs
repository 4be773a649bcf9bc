//! Value classification.
//!
//! Turns the raw right-hand side of a declaration or assignment into a
//! [`Value`]. The checks run in a fixed order because the patterns overlap:
//!
//! 1. quoted string
//! 2. boolean (case-insensitive)
//! 3. integer
//! 4. float
//! 5. bare identifier
//! 6. single-operator chain
//!
//! Anything else is a syntax error naming the fragment.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ast::{
        ast::Value,
        expressions::{ChainExpr, LiteralExpr, Operator, SymbolExpr},
        types::Literals,
    },
    errors::errors::Error,
    lexer::tokens::ScanState,
    Position, MK_ERROR,
};

lazy_static! {
    static ref BOOLEAN: Regex = Regex::new(r"^(?i:true|false)$").unwrap();
    static ref INTEGER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref FLOAT: Regex = Regex::new(r"^-?[0-9]+\.[0-9]*$").unwrap();
    pub static ref IDENTIFIER: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub fn classify(raw: &str, position: Position) -> Result<Value, Error> {
    let raw = raw.trim();

    if let Some(literal) = classify_literal(raw) {
        return Ok(Value::Literal(literal));
    }

    if IDENTIFIER.is_match(raw) {
        return Ok(Value::Symbol(SymbolExpr {
            value: raw.to_string(),
        }));
    }

    if let Some(chain) = split_chain(raw, &position)? {
        return Ok(Value::Chain(chain));
    }

    Err(MK_ERROR!(InvalidValue, position, fragment: raw.to_string()))
}

/// Applies only the literal rules (string, bool, int, float).
pub fn classify_literal(raw: &str) -> Option<LiteralExpr> {
    let raw = raw.trim();

    if let Some(text) = quoted_string(raw) {
        return Some(LiteralExpr {
            literal_type: Literals::String,
            text: text.to_string(),
        });
    }

    let literal_type = if BOOLEAN.is_match(raw) {
        Literals::Boolean
    } else if INTEGER.is_match(raw) {
        Literals::Int
    } else if FLOAT.is_match(raw) {
        Literals::Float
    } else {
        return None;
    };

    let text = if literal_type == Literals::Boolean {
        raw.to_lowercase()
    } else {
        raw.to_string()
    };

    Some(LiteralExpr { literal_type, text })
}

/// Returns the inside of `"..."` or `'...'`.
///
/// The literal ends at the first matching quote, so `"ab" + "cd"` is not a
/// string literal: its first closing quote is not the last character.
pub fn quoted_string(raw: &str) -> Option<&str> {
    let quote = raw.chars().next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }

    let closing = raw[1..].find(quote)? + 1;
    if closing == raw.len() - 1 {
        Some(&raw[1..closing])
    } else {
        None
    }
}

/// Splits `a + b + c` into its operands.
///
/// Returns `Ok(None)` when no operator appears outside quotes. A `+` or `-`
/// with nothing before it in the current operand is a sign.
fn split_chain(raw: &str, position: &Position) -> Result<Option<ChainExpr>, Error> {
    let mut operator: Option<Operator> = None;
    let mut operands = vec![];
    let mut current = String::new();
    let mut state = ScanState::Code;

    for character in raw.chars() {
        if state.in_code() {
            if let Some(found) = Operator::from_char(character) {
                let is_sign = current.trim().is_empty()
                    && matches!(found, Operator::Plus | Operator::Dash);

                if !is_sign {
                    if current.trim().is_empty() {
                        return Err(MK_ERROR!(EmptyOperand, position.clone(), fragment: raw.to_string()));
                    }

                    match operator {
                        None => operator = Some(found),
                        Some(existing) if existing != found => {
                            return Err(MK_ERROR!(
                                MixedOperators,
                                position.clone(),
                                fragment: raw.to_string(),
                                first: existing.to_string(),
                                second: found.to_string()
                            ));
                        }
                        Some(_) => {}
                    }

                    operands.push(current.trim().to_string());
                    current.clear();
                    continue;
                }
            }
        }

        state = state.step(character);
        current.push(character);
    }

    let Some(operator) = operator else {
        return Ok(None);
    };

    if current.trim().is_empty() {
        return Err(MK_ERROR!(EmptyOperand, position.clone(), fragment: raw.to_string()));
    }
    operands.push(current.trim().to_string());

    Ok(Some(ChainExpr { operands, operator }))
}
