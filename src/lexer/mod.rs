//! Statement splitting for the translator.
//!
//! This module turns raw source text into trimmed statement fragments. It handles:
//!
//! - `//` line comments
//! - Line breaks, which are collapsed to spaces
//! - `;` statement separators, ignoring those inside quotes
//! - Fragment position tracking for error reporting
//! - The reserved word table

pub mod lexer;
pub mod tokens;
