//! Unit tests for code generation.
//!
//! These tests parse small programs and check the emitted C++ lines and the
//! type environment the pass leaves behind.

use super::{
    compiler::{generate, Compiler, EPILOGUE, PREAMBLE},
    expr::{decimal_int, escape_cpp_string},
    names::BindingNames,
    stmt::gen_statement,
};
use crate::{
    ast::types::Literals,
    errors::errors::{Error, ErrorCategory, ErrorImpl},
    parser::parser::parse,
};

fn compile(source: &str) -> Result<Compiler, Error> {
    let statements = parse(source, Some("test.vyrn".to_string()))?;
    let mut compiler = Compiler::new();
    for statement in &statements {
        gen_statement(&mut compiler, statement)?;
    }
    Ok(compiler)
}

fn body(source: &str) -> Vec<String> {
    compile(source).unwrap().lines
}

fn error(source: &str) -> ErrorImpl {
    compile(source).unwrap_err().get_internal_error().clone()
}

#[test]
fn test_empty_program() {
    let output = generate(&[]).unwrap();
    assert_eq!(output, format!("{}{}", PREAMBLE, EPILOGUE));
}

#[test]
fn test_preamble_formatting() {
    assert!(PREAMBLE.contains("std::cout << std::boolalpha;"));
    assert!(PREAMBLE.contains("std::setprecision(std::numeric_limits<double>::max_digits10)"));
    assert!(PREAMBLE.contains("int main() {"));
    assert!(EPILOGUE.contains("return 0;"));
}

#[test]
fn test_print_literal() {
    assert_eq!(body(r#"print("Hello");"#), vec![r#"std::cout << "Hello" << std::endl;"#]);
    assert_eq!(
        body(r#"print('say "hi"');"#),
        vec![r#"std::cout << "say \"hi\"" << std::endl;"#]
    );
}

#[test]
fn test_print_variable_is_not_checked() {
    assert_eq!(body("print(ghost);"), vec!["std::cout << v_ghost << std::endl;"]);
}

#[test]
fn test_literal_declarations() {
    assert_eq!(
        body("let a = 3; let b = -1.5; const s = 'hi'; let f = TRUE;"),
        vec![
            "long long v_a = 3;",
            "double v_b = -1.5;",
            "const std::string v_s = \"hi\";",
            "bool v_f = true;",
        ]
    );
}

#[test]
fn test_int_addition() {
    let compiler = compile("let a = 3; let b = 4; let c = a + b;").unwrap();

    assert_eq!(compiler.lines[2], "long long v_c = v_a + v_b;");
    assert_eq!(compiler.environment.get_variable("c"), Some(Literals::Int));
}

#[test]
fn test_division_promotes() {
    let compiler = compile("let x = 10; let y = 3; let z = x / y;").unwrap();

    assert_eq!(
        compiler.lines[2],
        "double v_z = static_cast<double>(v_x) / static_cast<double>(v_y);"
    );
    assert_eq!(compiler.environment.get_variable("z"), Some(Literals::Float));
}

#[test]
fn test_float_promotion() {
    let compiler = compile("let x = 2; let y = x * 1.5;").unwrap();

    assert_eq!(compiler.lines[1], "double v_y = v_x * 1.5;");
}

#[test]
fn test_string_concatenation() {
    let compiler = compile(r#"let s = "ab" + "cd"; let n = 2; let t = s + ' x' + n;"#).unwrap();

    assert_eq!(
        compiler.lines[0],
        r#"std::string v_s = std::string("ab") + std::string("cd");"#
    );
    assert_eq!(
        compiler.lines[2],
        r#"std::string v_t = v_s + std::string(" x") + vyrn_to_string(v_n);"#
    );
    assert_eq!(compiler.environment.get_variable("t"), Some(Literals::String));
}

#[test]
fn test_string_subtraction_fails() {
    let compile_error = compile(r#"let bad = "ab" - "cd";"#).unwrap_err();

    assert_eq!(compile_error.category(), ErrorCategory::Semantic);
    assert_eq!(
        compile_error.get_internal_error(),
        &ErrorImpl::UnsupportedOperation {
            operator: "-".to_string(),
            type_: "string".to_string()
        }
    );
}

#[test]
fn test_reference_declaration_copies() {
    let compiler = compile("let a = 1; let b = a; a = 2;").unwrap();

    assert_eq!(
        compiler.lines,
        vec!["long long v_a = 1;", "long long v_b = v_a;", "v_a = 2;"]
    );
    assert_eq!(compiler.environment.get_variable("b"), Some(Literals::Int));
}

#[test]
fn test_reference_to_constant() {
    let compiler = compile("const k = 'x'; let v = k;").unwrap();

    assert_eq!(compiler.lines[1], "std::string v_v = v_k;");
    assert_eq!(compiler.environment.get_variable("v"), Some(Literals::String));
}

#[test]
fn test_reference_not_declared() {
    assert_eq!(
        error("let b = nothing;"),
        ErrorImpl::ReferenceNotDeclared {
            variable: "nothing".to_string()
        }
    );
}

#[test]
fn test_assign_to_constant() {
    assert_eq!(
        error("const k = 5; k = 6;"),
        ErrorImpl::AssignToConstant {
            variable: "k".to_string()
        }
    );
}

#[test]
fn test_assign_undeclared() {
    assert_eq!(
        error("x = 6;"),
        ErrorImpl::VariableNotDeclared {
            variable: "x".to_string()
        }
    );
}

#[test]
fn test_assign_type_mismatch() {
    assert_eq!(
        error("let x = 1; x = 'one';"),
        ErrorImpl::TypeMatchError {
            variable: "x".to_string(),
            value: "\"one\"".to_string(),
            expected: "int".to_string(),
            received: "string".to_string()
        }
    );
    assert_eq!(
        error("let x = 1; let y = 2; x = x / y;"),
        ErrorImpl::TypeMatchError {
            variable: "x".to_string(),
            value: "x / y".to_string(),
            expected: "int".to_string(),
            received: "float".to_string()
        }
    );
}

#[test]
fn test_assign_expression() {
    let compiler = compile("let total = 1.0; total = total * 2;").unwrap();
    assert_eq!(compiler.lines[1], "v_total = v_total * 2;");
}

#[test]
fn test_annotated_declaration() {
    assert_eq!(body("const int n = 4;"), vec!["const long long v_n = 4;"]);
    assert_eq!(
        error("let int n = 4.5;"),
        ErrorImpl::TypeMatchError {
            variable: "n".to_string(),
            value: "4.5".to_string(),
            expected: "int".to_string(),
            received: "float".to_string()
        }
    );
}

#[test]
fn test_constant_redeclaration() {
    assert_eq!(
        error("const k = 1; const k = 2;"),
        ErrorImpl::ConstantAlreadyDeclared {
            variable: "k".to_string()
        }
    );
}

#[test]
fn test_variable_redeclaration_is_accepted() {
    assert_eq!(
        body("let a = 1; let a = 2; const a = 3;"),
        vec!["long long v_a = 1;", "long long v1_a = 2;", "const long long v2_a = 3;"]
    );
}

#[test]
fn test_redeclaration_reads_latest_variable() {
    assert_eq!(
        body("let a = 1; let a = a + 1; print(a); a = 5;"),
        vec![
            "long long v_a = 1;",
            "long long v1_a = v_a + 1;",
            "std::cout << v1_a << std::endl;",
            "v1_a = 5;",
        ]
    );

    // Variables are looked up before constants
    assert_eq!(
        body("let a = 1; const a = 'x'; let b = a; print(a);"),
        vec![
            "long long v_a = 1;",
            "const std::string v1_a = \"x\";",
            "long long v_b = v_a;",
            "std::cout << v_a << std::endl;",
        ]
    );
}

#[test]
fn test_cpp_keywords_as_names() {
    assert_eq!(
        body("let double = 1; let class = double * 2; let std = 'x'; let vyrn_to_string = std + class; print(vyrn_to_string);"),
        vec![
            "long long v_double = 1;",
            "long long v_class = v_double * 2;",
            "std::string v_std = \"x\";",
            "std::string v_vyrn_to_string = v_std + vyrn_to_string(v_class);",
            "std::cout << v_vyrn_to_string << std::endl;",
        ]
    );
}

#[test]
fn test_binding_names() {
    let mut names = BindingNames::new();

    assert_eq!(names.resolve("a"), "v_a");
    assert_eq!(names.declare("a", true), "v_a");
    assert_eq!(names.declare("a", false), "v1_a");
    assert_eq!(names.resolve("a"), "v1_a");
    assert_eq!(names.declare("_a", false), "v__a");
    assert_eq!(names.declare("a", true), "v2_a");
    assert_eq!(names.resolve("a"), "v1_a");
}

#[test]
fn test_integer_literals_are_decimal() {
    assert_eq!(
        body("let x = 010; let y = 09; let z = -007; let w = 000; let f = 010.5; let c = x + 08;"),
        vec![
            "long long v_x = 10;",
            "long long v_y = 9;",
            "long long v_z = -7;",
            "long long v_w = 0;",
            "double v_f = 010.5;",
            "long long v_c = v_x + 8;",
        ]
    );
}

#[test]
fn test_decimal_int() {
    assert_eq!(decimal_int("42"), "42");
    assert_eq!(decimal_int("0042"), "42");
    assert_eq!(decimal_int("-0042"), "-42");
    assert_eq!(decimal_int("0"), "0");
    assert_eq!(decimal_int("-0"), "0");
}

#[test]
fn test_first_error_wins() {
    let compile_error = compile("let a = 1; b = 2; const a = 'x'; a = 'y';").unwrap_err();
    assert_eq!(compile_error.get_error_name(), "VariableNotDeclared");
    assert_eq!(compile_error.get_position().0, 11);
}

#[test]
fn test_generate_is_deterministic() {
    let statements = parse("let a = 1; let b = a * 2; print(b);", None).unwrap();

    let first = generate(&statements).unwrap();
    let second = generate(&statements).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("    long long v_b = v_a * 2;\n"));
    assert!(first.ends_with(EPILOGUE));
}

#[test]
fn test_escape_cpp_string() {
    assert_eq!(escape_cpp_string("plain"), "\"plain\"");
    assert_eq!(escape_cpp_string(r"a\b"), r#""a\\b""#);
    assert_eq!(escape_cpp_string(r#"q"q"#), r#""q\"q""#);
}
