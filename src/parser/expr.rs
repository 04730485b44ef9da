use crate::{
    ast::{
        ast::Node,
        declarations::Type,
        expressions::{
            ArrayRef, Assignment, BinaryOp, Cast, Constant, ConstantType, ExprList, FuncCall,
            UnaryOp, ID,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    parser.nested(|parser| parse_expr_at(parser, bp))
}

fn parse_expr_at(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    // First parse NUD
    let nud_fn = parser
        .current_token_kind()
        .and_then(|kind| parser.get_nud_lookup().get(&kind).copied());

    let mut left = match nud_fn {
        Some(nud_fn) => nud_fn(parser)?,
        None => return Err(parser.unexpected()),
    };

    // Only a unary expression may be assigned to, casts and operator
    // expressions may not.
    let mut unary = !matches!(left, Node::Cast(_));

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while parser.current_bp() > bp {
        let next_bp = parser.current_bp();

        if parser.at(TokenKind::Assignment) && !unary {
            return Err(parser.unexpected());
        }

        let led_fn = parser
            .current_token_kind()
            .and_then(|kind| parser.get_led_lookup().get(&kind).copied());

        left = match led_fn {
            Some(led_fn) => led_fn(parser, left, next_bp)?,
            None => return Err(parser.unexpected()),
        };
        unary = next_bp == BindingPower::Postfix;
    }

    Ok(left)
}

/// `expression`: one or more assignment expressions separated by commas.
/// More than one builds an `ExprList`.
pub fn parse_expression(parser: &mut Parser) -> Result<Node, Error> {
    let first = parse_expr(parser, BindingPower::Default)?;

    if !parser.at(TokenKind::Comma) {
        return Ok(first);
    }

    let mut exprs = vec![first];
    while parser.accept(TokenKind::Comma).is_some() {
        exprs.push(parse_expr(parser, BindingPower::Default)?);
    }

    Ok(Node::from(ExprList { exprs, coord: None }))
}

/// Arguments of a call or of `read`. A single argument is returned as is.
pub fn parse_argument_list(parser: &mut Parser) -> Result<Node, Error> {
    let mut args = vec![parse_expr(parser, BindingPower::Default)?];

    while parser.accept(TokenKind::Comma).is_some() {
        args.push(parse_expr(parser, BindingPower::Default)?);
    }

    if args.len() == 1 {
        Ok(args.remove(0))
    } else {
        Ok(Node::from(ExprList {
            exprs: args,
            coord: None,
        }))
    }
}

fn strip_quotes(value: &str, quote: char) -> String {
    value
        .strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(value)
        .to_string()
}

fn constant(token: Token, type_: ConstantType) -> Node {
    let value = match type_ {
        ConstantType::Int => token.value,
        ConstantType::Char => strip_quotes(&token.value, '\''),
        ConstantType::String => strip_quotes(&token.value, '"'),
    };

    Node::from(Constant {
        type_,
        value,
        coord: Some(token.coord),
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.advance().ok_or_else(|| parser.unexpected())?;

    match token.kind {
        TokenKind::Identifier => Ok(Node::from(ID {
            name: token.value,
            coord: Some(token.coord),
        })),
        TokenKind::IntConst => Ok(constant(token, ConstantType::Int)),
        TokenKind::CharConst => Ok(constant(token, ConstantType::Char)),
        TokenKind::StringLiteral => Ok(constant(token, ConstantType::String)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.coord,
        )),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let operator_token = parser.advance().ok_or_else(|| parser.unexpected())?;

    let right = parse_expr(parser, bp)?;

    Ok(Node::from(BinaryOp {
        op: operator_token.value,
        left: Box::new(left),
        right: Box::new(right),
        coord: Some(operator_token.coord),
    }))
}

/// Relational operators do not chain: `a < b < c` stops at the second `<`.
pub fn parse_relational_expr(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let expr = parse_binary_expr(parser, left, bp)?;

    if parser.current_token_kind().is_some_and(|kind| kind.is_relational()) {
        return Err(parser.unexpected());
    }

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Node, Error> {
    let operator_token = parser.advance().ok_or_else(|| parser.unexpected())?;
    let rhs = parse_expr(parser, BindingPower::Unary)?;

    Ok(Node::from(UnaryOp {
        op: operator_token.value,
        expr: Box::new(rhs),
        coord: Some(operator_token.coord),
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Node, _bp: BindingPower) -> Result<Node, Error> {
    let operator_token = parser.advance().ok_or_else(|| parser.unexpected())?;
    // Right associative
    let rhs = parse_expr(parser, BindingPower::Default)?;

    Ok(Node::from(Assignment {
        op: operator_token.value,
        lvalue: Box::new(left),
        rvalue: Box::new(rhs),
        coord: Some(operator_token.coord),
    }))
}

/// `( expression )` or, when a type specifier follows the parenthesis, a cast.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;

    if parser.current_token_kind().is_some_and(|kind| kind.is_type_specifier()) {
        let type_token = parser.advance().ok_or_else(|| parser.unexpected())?;
        parser.expect(TokenKind::CloseParen)?;
        let expr = parse_expr(parser, BindingPower::Unary)?;

        return Ok(Node::from(Cast {
            to_type: Box::new(Node::from(Type {
                name: type_token.value,
                coord: Some(type_token.coord),
            })),
            expr: Box::new(expr),
            coord: Some(open.coord),
        }));
    }

    let expr = parse_expression(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_array_ref_expr(parser: &mut Parser, left: Node, _bp: BindingPower) -> Result<Node, Error> {
    let open = parser.expect(TokenKind::OpenBracket)?;
    let subscript = parse_expression(parser)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(Node::from(ArrayRef {
        name: Box::new(left),
        subscript: Box::new(subscript),
        coord: Some(open.coord),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Node, _bp: BindingPower) -> Result<Node, Error> {
    let open = parser.expect(TokenKind::OpenParen)?;

    let args = if parser.at(TokenKind::CloseParen) {
        None
    } else {
        Some(Box::new(parse_argument_list(parser)?))
    };

    parser.expect(TokenKind::CloseParen)?;

    Ok(Node::from(FuncCall {
        name: Box::new(left),
        args,
        coord: Some(open.coord),
    }))
}
