use crate::Coord;

use super::ast::Node;

/// Root of every successful parse. `gdecls` holds `FuncDef` and `GlobalDecl`
/// nodes in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub gdecls: Vec<Node>,
    pub coord: Option<Coord>,
}

/// One top-level declaration statement, e.g. `int a, b[2];`.
///
/// `spec` is only set for a declaration without declarators (`char;`), where
/// no `Decl` is left to carry the type specifier.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalDecl {
    pub spec: Option<Box<Node>>,
    pub decls: Vec<Node>,
    pub coord: Option<Coord>,
}

/// A single declared name.
///
/// `type_` is the declarator chain: `ArrayDecl` and `FuncDecl` wrap an inner
/// declarator and the chain always ends in a `VarDecl`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    pub name: String,
    pub type_: Box<Node>,
    pub init: Option<Box<Node>>,
    pub coord: Option<Coord>,
}

/// The declarations introduced by the first clause of a `for`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclList {
    pub decls: Vec<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub spec: Box<Node>,
    pub decl: Box<Node>,
    pub body: Box<Node>,
    pub coord: Option<Coord>,
}

/// "function returning `type_`".
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    pub args: Option<Box<Node>>,
    pub type_: Box<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamList {
    pub params: Vec<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub declname: String,
    pub type_: Box<Node>,
    pub coord: Option<Coord>,
}

/// "array of `type_`", with an optional dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDecl {
    pub type_: Box<Node>,
    pub dim: Option<Box<Node>>,
    pub coord: Option<Coord>,
}

/// A type specifier: `int`, `char` or `void`.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub name: String,
    pub coord: Option<Coord>,
}
