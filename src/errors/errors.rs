use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::UnknownCommand { .. }
            | ErrorImpl::InvalidValue { .. }
            | ErrorImpl::MixedOperators { .. }
            | ErrorImpl::EmptyOperand { .. }
            | ErrorImpl::ReservedName { .. }
            | ErrorImpl::UnknownType { .. } => ErrorCategory::Syntax,
            ErrorImpl::ConstantAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::ReferenceNotDeclared { .. }
            | ErrorImpl::AssignToConstant { .. }
            | ErrorImpl::TypeMatchError { .. }
            | ErrorImpl::UnsupportedOperation { .. }
            | ErrorImpl::UnrecognisedOperand { .. }
            | ErrorImpl::EmptyExpression => ErrorCategory::Semantic,
            ErrorImpl::CompilerNotFound { .. }
            | ErrorImpl::CompilationFailed { .. }
            | ErrorImpl::ExecutionFailed { .. }
            | ErrorImpl::TimedOut { .. }
            | ErrorImpl::Io { .. } => ErrorCategory::Toolchain,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownCommand { .. } => "UnknownCommand",
            ErrorImpl::InvalidValue { .. } => "InvalidValue",
            ErrorImpl::MixedOperators { .. } => "MixedOperators",
            ErrorImpl::EmptyOperand { .. } => "EmptyOperand",
            ErrorImpl::ReservedName { .. } => "ReservedName",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::ConstantAlreadyDeclared { .. } => "ConstantAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::ReferenceNotDeclared { .. } => "ReferenceNotDeclared",
            ErrorImpl::AssignToConstant { .. } => "AssignToConstant",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::UnsupportedOperation { .. } => "UnsupportedOperation",
            ErrorImpl::UnrecognisedOperand { .. } => "UnrecognisedOperand",
            ErrorImpl::EmptyExpression => "EmptyExpression",
            ErrorImpl::CompilerNotFound { .. } => "CompilerNotFound",
            ErrorImpl::CompilationFailed { .. } => "CompilationFailed",
            ErrorImpl::ExecutionFailed { .. } => "ExecutionFailed",
            ErrorImpl::TimedOut { .. } => "TimedOut",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownCommand { .. } => ErrorTip::Suggestion(String::from(
                "expected print(...), let, const or an assignment; did you miss a semicolon?",
            )),
            ErrorImpl::InvalidValue { fragment } => ErrorTip::Suggestion(format!(
                "`{}` is not a literal, a variable or a single-operator expression",
                fragment
            )),
            ErrorImpl::MixedOperators { first, second, .. } => ErrorTip::Suggestion(format!(
                "Operators `{}` and `{}` cannot be mixed in one expression",
                first, second
            )),
            ErrorImpl::ReservedName { name } => {
                ErrorTip::Suggestion(format!("`{}` is a reserved word", name))
            }
            ErrorImpl::ConstantAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Constant `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => ErrorTip::Suggestion(format!(
                "Declare `{}` with `let` before assigning to it",
                variable
            )),
            ErrorImpl::AssignToConstant { variable } => ErrorTip::Suggestion(format!(
                "`{}` was declared with `const`, use `let` to allow assignment",
                variable
            )),
            ErrorImpl::TypeMatchError { expected, received, .. } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::UnsupportedOperation { type_, .. } if type_ == "string" => {
                ErrorTip::Suggestion(String::from("Strings only support `+`"))
            }
            ErrorImpl::TimedOut { seconds, .. } => ErrorTip::Suggestion(format!(
                "The external step did not finish within {} seconds",
                seconds
            )),
            _ => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category(), self.internal_error)
    }
}

impl std::error::Error for Error {}

/// The disjoint families an [`Error`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Syntax,
    Semantic,
    /// Raised by the external build/run step, never by translation.
    Toolchain,
}

impl Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "SyntaxError"),
            ErrorCategory::Semantic => write!(f, "SemanticError"),
            ErrorCategory::Toolchain => write!(f, "ToolchainError"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unknown or invalid command: {statement:?}")]
    UnknownCommand { statement: String },
    #[error("invalid value: {fragment:?}")]
    InvalidValue { fragment: String },
    #[error("mixed operators {first:?} and {second:?} in {fragment:?}")]
    MixedOperators {
        fragment: String,
        first: String,
        second: String,
    },
    #[error("empty operand in expression {fragment:?}")]
    EmptyOperand { fragment: String },
    #[error("reserved word {name:?} cannot be used as a variable name")]
    ReservedName { name: String },
    #[error("unknown type {type_:?}")]
    UnknownType { type_: String },
    #[error("constant {variable:?} already declared")]
    ConstantAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("reference variable {variable:?} not declared")]
    ReferenceNotDeclared { variable: String },
    #[error("cannot assign to constant {variable:?}")]
    AssignToConstant { variable: String },
    #[error("type mismatch for {variable:?}: expected {expected}, received {received} from {value:?}")]
    TypeMatchError {
        variable: String,
        value: String,
        expected: String,
        received: String,
    },
    #[error("unsupported operation {operator:?} for type {type_}")]
    UnsupportedOperation { operator: String, type_: String },
    #[error("unrecognized value or variable {operand:?}")]
    UnrecognisedOperand { operand: String },
    #[error("operator applied to zero operands")]
    EmptyExpression,
    #[error("C++ compiler {compiler:?} not found on PATH")]
    CompilerNotFound { compiler: String },
    #[error("compilation failed:\n{stderr}")]
    CompilationFailed { stderr: String },
    #[error("execution of generated program failed ({status}):\n{stderr}")]
    ExecutionFailed { status: String, stderr: String },
    #[error("{step} timed out after {seconds}s")]
    TimedOut { step: String, seconds: u64 },
    #[error("i/o error: {message}")]
    Io { message: String },
}
