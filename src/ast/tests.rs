//! Unit tests for the AST module.
//!
//! Trees are built by hand here so the inspection surface and the source
//! writer are checked independently of the parser.

use crate::Coord;

use super::{
    ast::Node,
    declarations::{Decl, FuncDecl, GlobalDecl, Program, Type, VarDecl, ArrayDecl},
    expressions::{BinaryOp, Constant, ConstantType, FuncCall, ExprList, ID},
    source::{expr_to_source, to_source},
    statements::{For, Return, Break},
};

fn id(name: &str, coord: Option<Coord>) -> Node {
    Node::from(ID {
        name: name.to_string(),
        coord,
    })
}

fn int(value: &str) -> Node {
    Node::from(Constant {
        type_: ConstantType::Int,
        value: value.to_string(),
        coord: None,
    })
}

fn int_type() -> Node {
    Node::from(Type {
        name: String::from("int"),
        coord: None,
    })
}

fn var_decl(name: &str) -> Node {
    Node::from(VarDecl {
        declname: name.to_string(),
        type_: Box::new(int_type()),
        coord: None,
    })
}

fn binary(op: &str, left: Node, right: Node) -> Node {
    Node::from(BinaryOp {
        op: op.to_string(),
        left: Box::new(left),
        right: Box::new(right),
        coord: None,
    })
}

#[test]
fn test_type_name_and_attributes() {
    let constant = Node::from(Constant {
        type_: ConstantType::Char,
        value: String::from("\\n"),
        coord: Some(Coord::new(1, 5)),
    });

    assert_eq!(constant.type_name(), "Constant");
    assert_eq!(
        constant.attributes(),
        vec![("type", String::from("char")), ("value", String::from("\\n"))]
    );
    assert_eq!(constant.coord(), Some(Coord::new(1, 5)));

    let sum = binary("+", id("a", None), int("1"));
    assert_eq!(sum.attributes(), vec![("op", String::from("+"))]);
    assert_eq!(sum.coord(), None);
}

#[test]
fn test_children_are_named_in_order() {
    let sum = binary("*", id("a", None), id("b", None));
    let names = sum
        .children()
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<String>>();

    assert_eq!(names, vec!["left", "right"]);

    let list = Node::from(ExprList {
        exprs: vec![id("a", None), id("b", None), id("c", None)],
        coord: None,
    });
    let names = list
        .children()
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<String>>();

    assert_eq!(names, vec!["exprs[0]", "exprs[1]", "exprs[2]"]);
}

#[test]
fn test_absent_optionals_are_not_children() {
    let empty_for = Node::from(For {
        init: None,
        cond: None,
        next: None,
        body: Box::new(Node::from(Break { coord: None })),
        coord: Some(Coord::new(1, 1)),
    });

    let children = empty_for.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].0, "body");
    assert_eq!(children[0].1.type_name(), "Break");

    let bare_return = Node::from(Return {
        expr: None,
        coord: None,
    });
    assert!(bare_return.children().is_empty());

    let call = Node::from(FuncCall {
        name: Box::new(id("f", None)),
        args: None,
        coord: None,
    });
    assert_eq!(call.children().len(), 1);
}

#[test]
fn test_same_shape_ignores_coords() {
    let first = binary("-", id("x", Some(Coord::new(1, 1))), int("2"));
    let second = binary("-", id("x", Some(Coord::new(7, 3))), int("2"));
    let different = binary("-", id("y", None), int("2"));
    let other_op = binary("+", id("x", None), int("2"));

    assert!(first.same_shape(&second));
    assert!(!first.same_shape(&different));
    assert!(!first.same_shape(&other_op));
    assert_ne!(first, second);
}

#[test]
fn test_expr_to_source_parenthesises_operators() {
    let expr = binary("+", int("1"), binary("*", int("2"), id("x", None)));
    assert_eq!(expr_to_source(&expr), "(1 + (2 * x))");

    let call = Node::from(FuncCall {
        name: Box::new(id("f", None)),
        args: Some(Box::new(Node::from(ExprList {
            exprs: vec![id("a", None), int("3")],
            coord: None,
        }))),
        coord: None,
    });
    assert_eq!(expr_to_source(&call), "f(a, 3)");

    let string = Node::from(Constant {
        type_: ConstantType::String,
        value: String::from("hi\\n"),
        coord: None,
    });
    assert_eq!(expr_to_source(&string), "\"hi\\n\"");
}

#[test]
fn test_to_source_global_declaration() {
    let array = Node::from(ArrayDecl {
        type_: Box::new(var_decl("v")),
        dim: Some(Box::new(int("10"))),
        coord: None,
    });
    let function = Node::from(FuncDecl {
        args: None,
        type_: Box::new(var_decl("g")),
        coord: None,
    });

    let program = Program {
        gdecls: vec![Node::from(GlobalDecl {
            spec: None,
            decls: vec![
                Node::from(Decl {
                    name: String::from("a"),
                    type_: Box::new(var_decl("a")),
                    init: Some(Box::new(int("1"))),
                    coord: None,
                }),
                Node::from(Decl {
                    name: String::from("v"),
                    type_: Box::new(array),
                    init: None,
                    coord: None,
                }),
                Node::from(Decl {
                    name: String::from("g"),
                    type_: Box::new(function),
                    init: None,
                    coord: None,
                }),
            ],
            coord: None,
        })],
        coord: None,
    };

    assert_eq!(to_source(&program), "int a = 1, v[10], g();\n");
}

#[test]
fn test_program_same_shape() {
    let make = |name: &str| Program {
        gdecls: vec![Node::from(GlobalDecl {
            spec: None,
            decls: vec![Node::from(Decl {
                name: name.to_string(),
                type_: Box::new(var_decl(name)),
                init: None,
                coord: None,
            })],
            coord: None,
        })],
        coord: None,
    };

    assert!(make("a").same_shape(&make("a")));
    assert!(!make("a").same_shape(&make("b")));
}
