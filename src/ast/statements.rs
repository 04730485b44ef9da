use crate::Coord;

use super::ast::Node;

/// `{ declaration* statement* }`
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub decls: Vec<Node>,
    pub stmts: Vec<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub cond: Box<Node>,
    pub iftrue: Box<Node>,
    pub iffalse: Option<Box<Node>>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub cond: Box<Node>,
    pub body: Box<Node>,
    pub coord: Option<Coord>,
}

/// Both `for` forms. `init` is an expression or, for the declaration form,
/// a `DeclList`.
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub init: Option<Box<Node>>,
    pub cond: Option<Box<Node>>,
    pub next: Option<Box<Node>>,
    pub body: Box<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Break {
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub expr: Option<Box<Node>>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assert {
    pub expr: Box<Node>,
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub expr: Option<Box<Node>>,
    pub coord: Option<Coord>,
}

/// `read(...)`. `names` is one expression or an `ExprList`.
#[derive(Debug, Clone, PartialEq)]
pub struct Read {
    pub names: Box<Node>,
    pub coord: Option<Coord>,
}

/// A bare `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyStatement {
    pub coord: Option<Coord>,
}
