//! Unit tests for error handling.
//!
//! This module contains tests for error categories, names, tips and messages.

use crate::errors::errors::{Error, ErrorCategory, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.vyrn".to_string()))
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnknownCommand {
            statement: "foo bar".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_error_name(), "UnknownCommand");
}

#[test]
fn test_syntax_category() {
    let error = Error::new(
        ErrorImpl::InvalidValue {
            fragment: "3 4".to_string(),
        },
        at(0),
    );

    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert_eq!(error.to_string(), "SyntaxError: invalid value: \"3 4\"");
}

#[test]
fn test_unknown_command_message() {
    let error = Error::new(
        ErrorImpl::UnknownCommand {
            statement: "foo bar".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "SyntaxError: Unknown or invalid command: \"foo bar\""
    );
}

#[test]
fn test_semantic_category() {
    let errors = vec![
        ErrorImpl::ConstantAlreadyDeclared { variable: "k".to_string() },
        ErrorImpl::VariableNotDeclared { variable: "x".to_string() },
        ErrorImpl::ReferenceNotDeclared { variable: "y".to_string() },
        ErrorImpl::AssignToConstant { variable: "k".to_string() },
        ErrorImpl::TypeMatchError {
            variable: "x".to_string(),
            value: "\"one\"".to_string(),
            expected: "int".to_string(),
            received: "string".to_string(),
        },
        ErrorImpl::UnsupportedOperation {
            operator: "-".to_string(),
            type_: "string".to_string(),
        },
        ErrorImpl::UnrecognisedOperand { operand: "q".to_string() },
        ErrorImpl::EmptyExpression,
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, at(0));
        assert_eq!(error.category(), ErrorCategory::Semantic, "{}", error);
        assert!(error.to_string().starts_with("SemanticError: "));
    }
}

#[test]
fn test_toolchain_category() {
    let error = Error::new(
        ErrorImpl::CompilationFailed {
            stderr: "error: 'x' was not declared".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.category(), ErrorCategory::Toolchain);
    assert_eq!(error.get_error_name(), "CompilationFailed");
}

#[test]
fn test_unsupported_operation_names_operator() {
    let error = Error::new(
        ErrorImpl::UnsupportedOperation {
            operator: "-".to_string(),
            type_: "string".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "SemanticError: unsupported operation \"-\" for type string"
    );
    assert_eq!(error.get_tip().to_string(), "Strings only support `+`");
}

#[test]
fn test_type_mismatch_names_binding_and_value() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            variable: "x".to_string(),
            value: "a / 2".to_string(),
            expected: "int".to_string(),
            received: "float".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "SemanticError: type mismatch for \"x\": expected int, received float from \"a / 2\""
    );
    assert_eq!(error.get_tip().to_string(), "Expected type `int`, received `float`");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::EmptyExpression, at(0));

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::AssignToConstant {
            variable: "k".to_string(),
        },
        at(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`k`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_mk_error_macro() {
    let error = crate::MK_ERROR!(VariableNotDeclared, at(7), variable: "z".to_string());

    assert_eq!(error.get_position().0, 7);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::VariableNotDeclared {
            variable: "z".to_string()
        }
    );

    let error = crate::MK_ERROR!(EmptyExpression, at(3));
    assert_eq!(error.get_error_name(), "EmptyExpression");
}
