use std::fmt::Display;

use crate::Coord;

use super::ast::Node;

// LITERALS

/// Identifier reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ID {
    pub name: String,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstantType {
    Int,
    Char,
    String,
}

impl Display for ConstantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstantType::Int => write!(f, "int"),
            ConstantType::Char => write!(f, "char"),
            ConstantType::String => write!(f, "string"),
        }
    }
}

/// Integer, character or string constant.
///
/// `value` is the lexeme without its delimiting quotes. Escape sequences are
/// kept as written.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub type_: ConstantType,
    pub value: String,
    pub coord: Option<Coord>,
}

// OPERATORS

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub coord: Option<Coord>,
}

/// Prefix `!`, `+` or `-`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: String,
    pub expr: Box<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub op: String,
    pub lvalue: Box<Node>,
    pub rvalue: Box<Node>,
    pub coord: Option<Coord>,
}

/// `(type) expr`. `to_type` is always a `Type` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Cast {
    pub to_type: Box<Node>,
    pub expr: Box<Node>,
    pub coord: Option<Coord>,
}

// POSTFIX

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayRef {
    pub name: Box<Node>,
    pub subscript: Box<Node>,
    pub coord: Option<Coord>,
}

/// Function call. A single argument is stored as is, several arguments as
/// an `ExprList`, and `f()` has no `args`.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub name: Box<Node>,
    pub args: Option<Box<Node>>,
    pub coord: Option<Coord>,
}

// LISTS

/// Comma separated expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprList {
    pub exprs: Vec<Node>,
    pub coord: Option<Coord>,
}

/// Brace initializer, possibly nested.
#[derive(Debug, Clone, PartialEq)]
pub struct InitList {
    pub exprs: Vec<Node>,
    pub coord: Option<Coord>,
}
