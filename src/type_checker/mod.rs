//! Type environment and expression typing.
//!
//! This module holds the state and queries the code generator uses to type
//! the program while it walks it:
//!
//! - The two-table type environment (`let` and `const` bindings)
//! - Operand resolution against the environment or as literals
//! - Promotion rules for operator chains
//!
//! An environment belongs to a single translation run and is never shared.

pub mod environment;
pub mod resolver;
