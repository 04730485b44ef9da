//! Declarations, declarators and the program itself.
//!
//! A declarator is read completely before any node is built, because the
//! base type only becomes known at the bottom of the chain (`VarDecl`) while
//! the suffixes are written after the name.

use crate::{
    ast::{
        ast::Node,
        declarations::{ArrayDecl, Decl, FuncDecl, FuncDef, GlobalDecl, ParamList, Program, Type, VarDecl},
        expressions::InitList,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    Coord,
};

use super::{
    expr::parse_expr, lookups::BindingPower, parser::Parser, stmt::parse_compound_stmt,
};

/// A declarator as written, before the type specifier is attached.
enum Declarator {
    Var {
        name: String,
        coord: Coord,
    },
    Array {
        inner: Box<Declarator>,
        dim: Option<Node>,
        coord: Coord,
    },
    Func {
        inner: Box<Declarator>,
        params: Option<Node>,
        coord: Coord,
    },
}

impl Declarator {
    fn name(&self) -> &str {
        match self {
            Declarator::Var { name, .. } => name,
            Declarator::Array { inner, .. } | Declarator::Func { inner, .. } => inner.name(),
        }
    }

    fn name_coord(&self) -> Coord {
        match self {
            Declarator::Var { coord, .. } => *coord,
            Declarator::Array { inner, .. } | Declarator::Func { inner, .. } => inner.name_coord(),
        }
    }

    fn into_node(self, spec: &Type) -> Node {
        match self {
            Declarator::Var { name, coord } => Node::from(VarDecl {
                declname: name,
                type_: Box::new(Node::from(spec.clone())),
                coord: Some(coord),
            }),
            Declarator::Array { inner, dim, coord } => Node::from(ArrayDecl {
                type_: Box::new(inner.into_node(spec)),
                dim: dim.map(Box::new),
                coord: Some(coord),
            }),
            Declarator::Func {
                inner,
                params,
                coord,
            } => Node::from(FuncDecl {
                args: params.map(Box::new),
                type_: Box::new(inner.into_node(spec)),
                coord: Some(coord),
            }),
        }
    }
}

fn build_decl(spec: &Type, declarator: Declarator, init: Option<Node>) -> Node {
    let name = declarator.name().to_string();
    let coord = declarator.name_coord();

    Node::from(Decl {
        name,
        type_: Box::new(declarator.into_node(spec)),
        init: init.map(Box::new),
        coord: Some(coord),
    })
}

pub fn parse_type_specifier(parser: &mut Parser) -> Result<Type, Error> {
    if !parser.current_token_kind().is_some_and(|kind| kind.is_type_specifier()) {
        return Err(parser.unexpected());
    }

    let token = parser.advance().ok_or_else(|| parser.unexpected())?;

    Ok(Type {
        name: token.value,
        coord: Some(token.coord),
    })
}

/// identifier followed by any number of `[dim?]` and `(params?)` suffixes,
/// each wrapping what came before it.
fn parse_declarator(parser: &mut Parser) -> Result<Declarator, Error> {
    parser.nested(parse_declarator_at)
}

fn parse_declarator_at(parser: &mut Parser) -> Result<Declarator, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?;
    let mut declarator = Declarator::Var {
        name: identifier.value,
        coord: identifier.coord,
    };

    loop {
        if let Some(open) = parser.accept(TokenKind::OpenBracket) {
            // A dimension is a constant expression, assignment is not allowed
            let dim = if parser.at(TokenKind::CloseBracket) {
                None
            } else {
                Some(parse_expr(parser, BindingPower::Assignment)?)
            };
            parser.expect(TokenKind::CloseBracket)?;

            declarator = Declarator::Array {
                inner: Box::new(declarator),
                dim,
                coord: open.coord,
            };
        } else if let Some(open) = parser.accept(TokenKind::OpenParen) {
            let params = if parser.at(TokenKind::CloseParen) {
                None
            } else {
                Some(parse_parameter_list(parser)?)
            };
            parser.expect(TokenKind::CloseParen)?;

            declarator = Declarator::Func {
                inner: Box::new(declarator),
                params,
                coord: open.coord,
            };
        } else {
            return Ok(declarator);
        }
    }
}

fn parse_parameter_list(parser: &mut Parser) -> Result<Node, Error> {
    let mut params = vec![];

    loop {
        let spec = parse_type_specifier(parser)?;
        let declarator = parse_declarator(parser)?;
        params.push(build_decl(&spec, declarator, None));

        if parser.accept(TokenKind::Comma).is_none() {
            break;
        }
    }

    Ok(Node::from(ParamList {
        params,
        coord: None,
    }))
}

/// An assignment expression, or a brace list of initializers that may be
/// empty, nested and end in a trailing comma.
pub fn parse_initializer(parser: &mut Parser) -> Result<Node, Error> {
    parser.nested(parse_initializer_at)
}

fn parse_initializer_at(parser: &mut Parser) -> Result<Node, Error> {
    let Some(open) = parser.accept(TokenKind::OpenCurly) else {
        return parse_expr(parser, BindingPower::Default);
    };

    let mut exprs = vec![];
    while !parser.at(TokenKind::CloseCurly) {
        exprs.push(parse_initializer(parser)?);

        if parser.accept(TokenKind::Comma).is_none() {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::from(InitList {
        exprs,
        coord: Some(open.coord),
    }))
}

/// The rest of an init declarator list, from the first declarator up to and
/// including the closing `;`.
fn parse_init_declarator_list(parser: &mut Parser, spec: &Type, first: Declarator) -> Result<Vec<Node>, Error> {
    let mut decls = vec![];
    let mut declarator = first;

    loop {
        let init = if parser.accept(TokenKind::Assignment).is_some() {
            Some(parse_initializer(parser)?)
        } else {
            None
        };
        decls.push(build_decl(spec, declarator, init));

        if parser.accept(TokenKind::Comma).is_none() {
            break;
        }
        declarator = parse_declarator(parser)?;
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(decls)
}

/// `type_specifier init_declarator_list? ;`, returning one `Decl` per
/// declared name.
pub fn parse_declaration(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let spec = parse_type_specifier(parser)?;

    if parser.accept(TokenKind::Semicolon).is_some() {
        return Ok(vec![]);
    }

    let first = parse_declarator(parser)?;
    parse_init_declarator_list(parser, &spec, first)
}

/// A function definition or a declaration. Both start with a type specifier
/// and a declarator, the token after the declarator tells them apart.
pub fn parse_global_declaration(parser: &mut Parser) -> Result<Node, Error> {
    let spec = parse_type_specifier(parser)?;

    if parser.accept(TokenKind::Semicolon).is_some() {
        return Ok(Node::from(GlobalDecl {
            spec: Some(Box::new(Node::from(spec))),
            decls: vec![],
            coord: None,
        }));
    }

    let declarator = parse_declarator(parser)?;

    if parser.at(TokenKind::OpenCurly) {
        let body = parse_compound_stmt(parser)?;

        return Ok(Node::from(FuncDef {
            decl: Box::new(build_decl(&spec, declarator, None)),
            coord: spec.coord,
            spec: Box::new(Node::from(spec)),
            body: Box::new(body),
        }));
    }

    let decls = parse_init_declarator_list(parser, &spec, declarator)?;

    Ok(Node::from(GlobalDecl {
        spec: None,
        decls,
        coord: None,
    }))
}

pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let mut gdecls = vec![parse_global_declaration(parser)?];

    while parser.has_tokens() {
        gdecls.push(parse_global_declaration(parser)?);
    }

    Ok(Program {
        gdecls,
        coord: None,
    })
}
