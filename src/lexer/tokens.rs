use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Coord;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("assert", TokenKind::Assert);
        map.insert("break", TokenKind::Break);
        map.insert("char", TokenKind::Char);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("int", TokenKind::Int);
        map.insert("print", TokenKind::Print);
        map.insert("read", TokenKind::Read);
        map.insert("return", TokenKind::Return);
        map.insert("void", TokenKind::Void);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,

    IntConst,
    CharConst,
    StringLiteral,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,    // ==
    NotEquals, // !=

    Or,
    And,
    Not,

    Assignment, // =

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,

    // Reserved
    Assert,
    Break,
    Char,
    Else,
    For,
    If,
    Int,
    Print,
    Read,
    Return,
    Void,
    While,
}

impl TokenKind {
    /// The type specifiers that open a declaration.
    pub fn is_type_specifier(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Char | TokenKind::Void)
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Less | TokenKind::LessEquals | TokenKind::Greater | TokenKind::GreaterEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub coord: Coord,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} {}", self.kind, self.value, self.coord)
    }
}
