use crate::Coord;

use super::{declarations::*, expressions::*, statements::*};

/// Every AST node variant.
///
/// Children are owned by their parent, so the tree is acyclic and is freed
/// by dropping its root.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Program(Program),
    GlobalDecl(GlobalDecl),
    Decl(Decl),
    DeclList(DeclList),
    FuncDef(FuncDef),
    FuncDecl(FuncDecl),
    ParamList(ParamList),
    VarDecl(VarDecl),
    ArrayDecl(ArrayDecl),
    Type(Type),
    ID(ID),
    Constant(Constant),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    Assignment(Assignment),
    Cast(Cast),
    ArrayRef(ArrayRef),
    FuncCall(FuncCall),
    ExprList(ExprList),
    InitList(InitList),
    Compound(Compound),
    If(If),
    While(While),
    For(For),
    Break(Break),
    Return(Return),
    Assert(Assert),
    Print(Print),
    Read(Read),
    EmptyStatement(EmptyStatement),
}

macro_rules! impl_node_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_node_from!(
    Program, GlobalDecl, Decl, DeclList, FuncDef, FuncDecl, ParamList, VarDecl, ArrayDecl, Type,
    ID, Constant, BinaryOp, UnaryOp, Assignment, Cast, ArrayRef, FuncCall, ExprList, InitList,
    Compound, If, While, For, Break, Return, Assert, Print, Read, EmptyStatement,
);

fn push_child<'a>(children: &mut Vec<(String, &'a Node)>, name: &str, child: &'a Node) {
    children.push((name.to_string(), child));
}

fn push_optional<'a>(children: &mut Vec<(String, &'a Node)>, name: &str, child: &'a Option<Box<Node>>) {
    if let Some(child) = child {
        children.push((name.to_string(), child.as_ref()));
    }
}

fn push_list<'a>(children: &mut Vec<(String, &'a Node)>, name: &str, list: &'a [Node]) {
    for (index, child) in list.iter().enumerate() {
        children.push((format!("{}[{}]", name, index), child));
    }
}

impl Node {
    /// The variant tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Program(_) => "Program",
            Node::GlobalDecl(_) => "GlobalDecl",
            Node::Decl(_) => "Decl",
            Node::DeclList(_) => "DeclList",
            Node::FuncDef(_) => "FuncDef",
            Node::FuncDecl(_) => "FuncDecl",
            Node::ParamList(_) => "ParamList",
            Node::VarDecl(_) => "VarDecl",
            Node::ArrayDecl(_) => "ArrayDecl",
            Node::Type(_) => "Type",
            Node::ID(_) => "ID",
            Node::Constant(_) => "Constant",
            Node::BinaryOp(_) => "BinaryOp",
            Node::UnaryOp(_) => "UnaryOp",
            Node::Assignment(_) => "Assignment",
            Node::Cast(_) => "Cast",
            Node::ArrayRef(_) => "ArrayRef",
            Node::FuncCall(_) => "FuncCall",
            Node::ExprList(_) => "ExprList",
            Node::InitList(_) => "InitList",
            Node::Compound(_) => "Compound",
            Node::If(_) => "If",
            Node::While(_) => "While",
            Node::For(_) => "For",
            Node::Break(_) => "Break",
            Node::Return(_) => "Return",
            Node::Assert(_) => "Assert",
            Node::Print(_) => "Print",
            Node::Read(_) => "Read",
            Node::EmptyStatement(_) => "EmptyStatement",
        }
    }

    /// The fixed, non-node attributes of the variant.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        match self {
            Node::Decl(decl) => vec![("name", decl.name.clone())],
            Node::VarDecl(var) => vec![("declname", var.declname.clone())],
            Node::Type(type_) => vec![("name", type_.name.clone())],
            Node::ID(id) => vec![("name", id.name.clone())],
            Node::Constant(constant) => vec![
                ("type", constant.type_.to_string()),
                ("value", constant.value.clone()),
            ],
            Node::BinaryOp(binary) => vec![("op", binary.op.clone())],
            Node::UnaryOp(unary) => vec![("op", unary.op.clone())],
            Node::Assignment(assignment) => vec![("op", assignment.op.clone())],
            _ => vec![],
        }
    }

    /// Named children in source order. Absent optional children are left out.
    pub fn children(&self) -> Vec<(String, &Node)> {
        let mut children = vec![];

        match self {
            Node::Program(program) => push_list(&mut children, "gdecls", &program.gdecls),
            Node::GlobalDecl(global) => {
                push_optional(&mut children, "spec", &global.spec);
                push_list(&mut children, "decls", &global.decls);
            }
            Node::Decl(decl) => {
                push_child(&mut children, "type", &decl.type_);
                push_optional(&mut children, "init", &decl.init);
            }
            Node::DeclList(list) => push_list(&mut children, "decls", &list.decls),
            Node::FuncDef(def) => {
                push_child(&mut children, "spec", &def.spec);
                push_child(&mut children, "decl", &def.decl);
                push_child(&mut children, "body", &def.body);
            }
            Node::FuncDecl(func) => {
                push_optional(&mut children, "args", &func.args);
                push_child(&mut children, "type", &func.type_);
            }
            Node::ParamList(list) => push_list(&mut children, "params", &list.params),
            Node::VarDecl(var) => push_child(&mut children, "type", &var.type_),
            Node::ArrayDecl(array) => {
                push_child(&mut children, "type", &array.type_);
                push_optional(&mut children, "dim", &array.dim);
            }
            Node::Type(_) | Node::ID(_) | Node::Constant(_) => {}
            Node::BinaryOp(binary) => {
                push_child(&mut children, "left", &binary.left);
                push_child(&mut children, "right", &binary.right);
            }
            Node::UnaryOp(unary) => push_child(&mut children, "expr", &unary.expr),
            Node::Assignment(assignment) => {
                push_child(&mut children, "lvalue", &assignment.lvalue);
                push_child(&mut children, "rvalue", &assignment.rvalue);
            }
            Node::Cast(cast) => {
                push_child(&mut children, "to_type", &cast.to_type);
                push_child(&mut children, "expr", &cast.expr);
            }
            Node::ArrayRef(array_ref) => {
                push_child(&mut children, "name", &array_ref.name);
                push_child(&mut children, "subscript", &array_ref.subscript);
            }
            Node::FuncCall(call) => {
                push_child(&mut children, "name", &call.name);
                push_optional(&mut children, "args", &call.args);
            }
            Node::ExprList(list) => push_list(&mut children, "exprs", &list.exprs),
            Node::InitList(list) => push_list(&mut children, "exprs", &list.exprs),
            Node::Compound(compound) => {
                push_list(&mut children, "decls", &compound.decls);
                push_list(&mut children, "stmts", &compound.stmts);
            }
            Node::If(if_stmt) => {
                push_child(&mut children, "cond", &if_stmt.cond);
                push_child(&mut children, "iftrue", &if_stmt.iftrue);
                push_optional(&mut children, "iffalse", &if_stmt.iffalse);
            }
            Node::While(while_stmt) => {
                push_child(&mut children, "cond", &while_stmt.cond);
                push_child(&mut children, "body", &while_stmt.body);
            }
            Node::For(for_stmt) => {
                push_optional(&mut children, "init", &for_stmt.init);
                push_optional(&mut children, "cond", &for_stmt.cond);
                push_optional(&mut children, "next", &for_stmt.next);
                push_child(&mut children, "body", &for_stmt.body);
            }
            Node::Break(_) | Node::EmptyStatement(_) => {}
            Node::Return(ret) => push_optional(&mut children, "expr", &ret.expr),
            Node::Assert(assert) => push_child(&mut children, "expr", &assert.expr),
            Node::Print(print) => push_optional(&mut children, "expr", &print.expr),
            Node::Read(read) => push_child(&mut children, "names", &read.names),
        }

        children
    }

    pub fn coord(&self) -> Option<Coord> {
        match self {
            Node::Program(node) => node.coord,
            Node::GlobalDecl(node) => node.coord,
            Node::Decl(node) => node.coord,
            Node::DeclList(node) => node.coord,
            Node::FuncDef(node) => node.coord,
            Node::FuncDecl(node) => node.coord,
            Node::ParamList(node) => node.coord,
            Node::VarDecl(node) => node.coord,
            Node::ArrayDecl(node) => node.coord,
            Node::Type(node) => node.coord,
            Node::ID(node) => node.coord,
            Node::Constant(node) => node.coord,
            Node::BinaryOp(node) => node.coord,
            Node::UnaryOp(node) => node.coord,
            Node::Assignment(node) => node.coord,
            Node::Cast(node) => node.coord,
            Node::ArrayRef(node) => node.coord,
            Node::FuncCall(node) => node.coord,
            Node::ExprList(node) => node.coord,
            Node::InitList(node) => node.coord,
            Node::Compound(node) => node.coord,
            Node::If(node) => node.coord,
            Node::While(node) => node.coord,
            Node::For(node) => node.coord,
            Node::Break(node) => node.coord,
            Node::Return(node) => node.coord,
            Node::Assert(node) => node.coord,
            Node::Print(node) => node.coord,
            Node::Read(node) => node.coord,
            Node::EmptyStatement(node) => node.coord,
        }
    }

    /// Structural equality that ignores coordinates.
    pub fn same_shape(&self, other: &Node) -> bool {
        if self.type_name() != other.type_name() || self.attributes() != other.attributes() {
            return false;
        }

        let children = self.children();
        let other_children = other.children();

        children.len() == other_children.len()
            && children
                .iter()
                .zip(other_children.iter())
                .all(|((name, child), (other_name, other_child))| {
                    name == other_name && child.same_shape(other_child)
                })
    }
}

impl Program {
    pub fn same_shape(&self, other: &Program) -> bool {
        self.gdecls.len() == other.gdecls.len()
            && self
                .gdecls
                .iter()
                .zip(other.gdecls.iter())
                .all(|(gdecl, other_gdecl)| gdecl.same_shape(other_gdecl))
    }
}
