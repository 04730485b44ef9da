use crate::{
    ast::{
        ast::Node,
        declarations::DeclList,
        statements::{
            Assert, Break, Compound, EmptyStatement, For, If, Print, Read, Return, While,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{
    decl::parse_declaration,
    expr::{parse_argument_list, parse_expression},
    parser::Parser,
};

/// Parses one statement. Anything without a statement handler is an
/// expression statement, which is returned as the bare expression.
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    parser.nested(parse_stmt_at)
}

fn parse_stmt_at(parser: &mut Parser) -> Result<Node, Error> {
    let stmt_fn = parser
        .current_token_kind()
        .and_then(|kind| parser.get_stmt_lookup().get(&kind).copied());

    if let Some(stmt_fn) = stmt_fn {
        return stmt_fn(parser);
    }

    let expr = parse_expression(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(expr)
}

/// An expression that may be left out, ending at `terminator`. The
/// terminator itself is not consumed.
fn parse_optional_expression(parser: &mut Parser, terminator: TokenKind) -> Result<Option<Box<Node>>, Error> {
    if parser.at(terminator) {
        Ok(None)
    } else {
        Ok(Some(Box::new(parse_expression(parser)?)))
    }
}

pub fn parse_compound_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.expect(TokenKind::OpenCurly)?;

    let mut decls = vec![];
    while parser.current_token_kind().is_some_and(|kind| kind.is_type_specifier()) {
        decls.extend(parse_declaration(parser)?);
    }

    let mut stmts = vec![];
    while !parser.at(TokenKind::CloseCurly) {
        stmts.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Node::from(Compound {
        decls,
        stmts,
        coord: Some(open.coord),
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::If)?;

    parser.expect(TokenKind::OpenParen)?;
    let cond = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let iftrue = parse_stmt(parser)?;

    // An `else` always belongs to the innermost `if` still open
    let iffalse = if parser.accept(TokenKind::Else).is_some() {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Node::from(If {
        cond: Box::new(cond),
        iftrue: Box::new(iftrue),
        iffalse,
        coord: Some(keyword.coord),
    }))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::While)?;

    parser.expect(TokenKind::OpenParen)?;
    let cond = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Node::from(While {
        cond: Box::new(cond),
        body: Box::new(body),
        coord: Some(keyword.coord),
    }))
}

/// `for (init?; cond?; next?) stmt` and `for (declaration cond?; next?) stmt`.
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::For)?;
    parser.expect(TokenKind::OpenParen)?;

    let init = if parser.current_token_kind().is_some_and(|kind| kind.is_type_specifier()) {
        // The declaration brings its own `;`
        let decls = parse_declaration(parser)?;
        Some(Box::new(Node::from(DeclList { decls, coord: None })))
    } else {
        let init = parse_optional_expression(parser, TokenKind::Semicolon)?;
        parser.expect(TokenKind::Semicolon)?;
        init
    };

    let cond = parse_optional_expression(parser, TokenKind::Semicolon)?;
    parser.expect(TokenKind::Semicolon)?;

    let next = parse_optional_expression(parser, TokenKind::CloseParen)?;
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Node::from(For {
        init,
        cond,
        next,
        body: Box::new(body),
        coord: Some(keyword.coord),
    }))
}

pub fn parse_break_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::Break)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::from(Break {
        coord: Some(keyword.coord),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::Return)?;
    let expr = parse_optional_expression(parser, TokenKind::Semicolon)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::from(Return {
        expr,
        coord: Some(keyword.coord),
    }))
}

pub fn parse_assert_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::Assert)?;
    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::from(Assert {
        expr: Box::new(expr),
        coord: Some(keyword.coord),
    }))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::Print)?;

    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_optional_expression(parser, TokenKind::CloseParen)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::from(Print {
        expr,
        coord: Some(keyword.coord),
    }))
}

pub fn parse_read_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let keyword = parser.expect(TokenKind::Read)?;

    parser.expect(TokenKind::OpenParen)?;
    let names = parse_argument_list(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Node::from(Read {
        names: Box::new(names),
        coord: Some(keyword.coord),
    }))
}

pub fn parse_empty_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let semicolon = parser.expect(TokenKind::Semicolon)?;

    Ok(Node::from(EmptyStatement {
        coord: Some(semicolon.coord),
    }))
}
