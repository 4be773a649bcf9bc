//! Parser module for building the statement list.
//!
//! This module contains the parser that transforms statement fragments into
//! AST statements. It handles:
//!
//! - Statement grammar dispatch over a prioritised regex table
//! - Value classification (literals, references, operator chains)
//! - Reserved-word checks on binding names
//! - Optional type annotations on declarations

pub mod classifier;
pub mod lookups;
pub mod parser;
pub mod stmt;
