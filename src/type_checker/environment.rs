use std::collections::HashMap;

use log::warn;

use crate::{ast::types::Literals, errors::errors::Error, Position, MK_ERROR};

/// The two binding tables of one translation run.
///
/// `let` bindings live in `variable_lookup`, `const` bindings in
/// `constant_lookup`. The tables are checked independently: a name may sit in
/// both at once.
#[derive(Debug, Default, Clone)]
pub struct TypeEnvironment {
    variable_lookup: HashMap<String, Literals>,
    constant_lookup: HashMap<String, Literals>,
}

impl TypeEnvironment {
    pub fn new() -> Self {
        TypeEnvironment::default()
    }

    /// Registers a binding in the table matching `is_constant`.
    ///
    /// Only a constant already present among constants is rejected. A
    /// variable redeclaration replaces the recorded type.
    pub fn declare_variable(
        &mut self,
        variable_name: String,
        variable_type: Literals,
        is_constant: bool,
        current_position: Position,
    ) -> Result<(), Error> {
        if is_constant {
            if self.constant_lookup.contains_key(&variable_name) {
                return Err(MK_ERROR!(ConstantAlreadyDeclared, current_position, variable: variable_name));
            }
            if self.variable_lookup.contains_key(&variable_name) {
                warn!("`{}` is now both a variable and a constant", variable_name);
            }
            self.constant_lookup.insert(variable_name, variable_type);
        } else {
            if self.constant_lookup.contains_key(&variable_name) {
                warn!("`{}` is now both a constant and a variable", variable_name);
            }
            self.variable_lookup.insert(variable_name, variable_type);
        }

        Ok(())
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<Literals> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn get_constant(&self, variable_name: &str) -> Option<Literals> {
        self.constant_lookup.get(variable_name).copied()
    }

    /// Looks a name up among variables first, then constants.
    pub fn lookup(&self, variable_name: &str) -> Option<Literals> {
        self.get_variable(variable_name)
            .or_else(|| self.get_constant(variable_name))
    }

    pub fn is_constant(&self, variable_name: &str) -> bool {
        self.constant_lookup.contains_key(variable_name)
    }
}
