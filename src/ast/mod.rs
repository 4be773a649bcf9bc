/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement and value enums
/// - expressions: Literal, symbol and operator-chain values
/// - statements: The four statement kinds
/// - types: The value types and their C++ spelling
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
