use log::{debug, warn};

use crate::{
    ast::{
        ast::Stmt,
        statements::{AssignmentStmt, VarDeclStmt},
    },
    errors::errors::Error,
    Position, MK_ERROR,
};

use super::{
    compiler::Compiler,
    expr::{escape_cpp_string, gen_value},
};

pub fn gen_statement(compiler: &mut Compiler, statement: &Stmt) -> Result<(), Error> {
    let position = statement.get_position();
    debug!("statement at {}", position.0);

    match statement {
        Stmt::PrintLiteral(print) => {
            compiler.emit(format!("std::cout << {} << std::endl;", escape_cpp_string(&print.text)));
        }
        Stmt::PrintVariable(print) => {
            // Undeclared names are left for the C++ compiler to reject
            if compiler.environment.lookup(&print.identifier).is_none() {
                warn!("print of undeclared name `{}`", print.identifier);
            }
            let name = compiler.names.resolve(&print.identifier);
            compiler.emit(format!("std::cout << {} << std::endl;", name));
        }
        Stmt::VarDecl(var_decl) => gen_var_decl(compiler, var_decl, position)?,
        Stmt::Assignment(assignment) => gen_assignment(compiler, assignment, position)?,
    }

    Ok(())
}

fn gen_var_decl(compiler: &mut Compiler, var_decl: &VarDeclStmt, position: Position) -> Result<(), Error> {
    let (value, value_type) = gen_value(compiler, &var_decl.assigned_value, &position)?;

    if let Some(explicit_type) = var_decl.explicit_type {
        if explicit_type != value_type {
            return Err(MK_ERROR!(
                TypeMatchError,
                position,
                variable: var_decl.identifier.clone(),
                value: var_decl.assigned_value.to_string(),
                expected: explicit_type.to_string(),
                received: value_type.to_string()
            ));
        }
    }

    compiler.environment.declare_variable(
        var_decl.identifier.clone(),
        value_type,
        var_decl.is_constant,
        position,
    )?;

    let name = compiler.names.declare(&var_decl.identifier, var_decl.is_constant);
    let qualifier = if var_decl.is_constant { "const " } else { "" };
    compiler.emit(format!("{}{} {} = {};", qualifier, value_type.cpp_type(), name, value));

    Ok(())
}

fn gen_assignment(compiler: &mut Compiler, assignment: &AssignmentStmt, position: Position) -> Result<(), Error> {
    if compiler.environment.is_constant(&assignment.assignee) {
        return Err(MK_ERROR!(AssignToConstant, position, variable: assignment.assignee.clone()));
    }

    let Some(declared_type) = compiler.environment.get_variable(&assignment.assignee) else {
        return Err(MK_ERROR!(VariableNotDeclared, position, variable: assignment.assignee.clone()));
    };

    let (value, value_type) = gen_value(compiler, &assignment.value, &position)?;

    if value_type != declared_type {
        return Err(MK_ERROR!(
            TypeMatchError,
            position,
            variable: assignment.assignee.clone(),
            value: assignment.value.to_string(),
            expected: declared_type.to_string(),
            received: value_type.to_string()
        ));
    }

    let name = compiler.names.resolve(&assignment.assignee);
    compiler.emit(format!("{} = {};", name, value));

    Ok(())
}
