//! Main code generation module.
//!
//! This module contains the Compiler structure and the single forward pass
//! from statements to C++ source text. The compiler owns the type
//! environment for the run and the emitted body lines.

use log::debug;

use crate::{ast::ast::Stmt, errors::errors::Error, type_checker::environment::TypeEnvironment};

use super::{names::BindingNames, stmt::gen_statement};

/// Fixed program header: includes, the stringify helper used by string
/// concatenation, and console formatting so booleans print as words and
/// doubles round-trip.
pub const PREAMBLE: &str = "#include <iomanip>
#include <iostream>
#include <limits>
#include <sstream>
#include <string>

template <typename T>
std::string vyrn_to_string(const T& value) {
    std::ostringstream out;
    out << std::boolalpha << std::setprecision(std::numeric_limits<double>::max_digits10) << value;
    return out.str();
}

int main() {
    std::cout << std::boolalpha;
    std::cout << std::setprecision(std::numeric_limits<double>::max_digits10);
";

pub const EPILOGUE: &str = "    return 0;
}
";

pub const INDENT: &str = "    ";

/// State of one translation run.
#[derive(Debug)]
pub struct Compiler {
    /// Bindings declared so far, in statement order
    pub environment: TypeEnvironment,
    /// C++ identifier of each binding
    pub names: BindingNames,
    /// Emitted body lines, without indentation
    pub lines: Vec<String>,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            environment: TypeEnvironment::new(),
            names: BindingNames::new(),
            lines: vec![],
        }
    }

    pub fn emit(&mut self, line: String) {
        debug!("emit: {}", line);
        self.lines.push(line);
    }

    /// Wraps the body in the preamble and epilogue.
    pub fn finish(&self) -> String {
        let mut output = String::from(PREAMBLE);
        for line in &self.lines {
            output.push_str(INDENT);
            output.push_str(line);
            output.push('\n');
        }
        output.push_str(EPILOGUE);
        output
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Compiler::new()
    }
}

/// Generates a complete C++ program from parsed statements.
///
/// Every call starts from an empty environment, so the output depends on
/// nothing but `statements`. The first failing statement aborts generation.
pub fn generate(statements: &[Stmt]) -> Result<String, Error> {
    let mut compiler = Compiler::new();

    for statement in statements {
        gen_statement(&mut compiler, statement)?;
    }

    Ok(compiler.finish())
}
