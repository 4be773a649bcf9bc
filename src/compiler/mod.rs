//! Code generation module for the translator.
//!
//! This module turns the parsed statements into C++17 source text. It handles:
//!
//! - The fixed preamble and epilogue around `main`
//! - Declarations, assignments and prints, in statement order
//! - Type checks against the run's type environment
//! - Rendering of literals, references and operator chains
//! - C++ identifiers for bindings, fresh per declaration

pub mod compiler;
pub mod expr;
pub mod names;
pub mod stmt;

#[cfg(test)]
mod tests;
