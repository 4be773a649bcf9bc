//! Type system definitions for the AST.
//!
//! Vyrn has four value types. Each maps to exactly one C++ type in the
//! generated program.

use std::fmt::Display;

/// Represents the different literal types in the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literals {
    String,
    Int,
    Float,
    Boolean,
}

impl Literals {
    /// Looks up a type by its Vyrn keyword (`int`, `float`, `string`, `bool`).
    pub fn from_keyword(keyword: &str) -> Option<Literals> {
        match keyword {
            "int" => Some(Literals::Int),
            "float" => Some(Literals::Float),
            "string" => Some(Literals::String),
            "bool" => Some(Literals::Boolean),
            _ => None,
        }
    }

    /// The C++ spelling of the type.
    pub fn cpp_type(&self) -> &'static str {
        match self {
            Literals::String => "std::string",
            Literals::Int => "long long",
            Literals::Float => "double",
            Literals::Boolean => "bool",
        }
    }
}

impl Display for Literals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literals::String => write!(f, "string"),
            Literals::Int => write!(f, "int"),
            Literals::Float => write!(f, "float"),
            Literals::Boolean => write!(f, "bool"),
        }
    }
}
