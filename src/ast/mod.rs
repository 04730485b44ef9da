/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` tagged union and its inspection surface
/// - declarations: Program, declarations and declarators
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - source: Turns a tree back into uC source text
pub mod ast;
pub mod declarations;
pub mod expressions;
pub mod source;
pub mod statements;

#[cfg(test)]
mod tests;
