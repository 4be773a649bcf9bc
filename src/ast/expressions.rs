use std::fmt::Display;

use super::types::Literals;

/// A literal value exactly as written, quotes stripped for strings.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub literal_type: Literals,
    pub text: String,
}

/// A bare identifier naming a previously declared binding.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
}

/// A flat chain of operands joined by one repeated operator, e.g. `a + b + 3`.
///
/// Operands are kept as raw (trimmed) text; their types are only known once
/// the chain is resolved against a type environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainExpr {
    pub operands: Vec<String>,
    pub operator: Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Dash,
    Star,
    Slash,
}

impl Operator {
    pub fn from_char(character: char) -> Option<Operator> {
        match character {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Dash),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Dash => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
