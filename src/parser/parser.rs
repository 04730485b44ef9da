//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parse entry point.
//! The parser pulls tokens from the lexer one at a time and keeps a single
//! token of lookahead. It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix and postfix expressions
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::declarations::Program,
    errors::errors::{Error, ErrorImpl, ErrorSink},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::{Token, TokenKind},
    },
};

use super::{
    decl::parse_program,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
};

/// How deep expressions, statements, declarators and initializers may nest
/// before the parse is abandoned. Each level recurses, so this keeps the
/// parser inside the stack of a default thread.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
pub struct Parser<'a> {
    /// Token source, also the route to the diagnostic sink
    lexer: Lexer<'a>,
    /// The lookahead token, `None` once the input is exhausted
    current: Option<Token>,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
    /// Current nesting level, see `enter`
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser and pulls the first token.
    ///
    /// The lookup tables start empty, see `create_token_lookups`.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next();

        Parser {
            lexer,
            current,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<Token> {
        let next = self.lexer.next();
        std::mem::replace(&mut self.current, next)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Consumes the current token if it is of the given kind.
    pub fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.at(kind) {
            self.advance()
        } else {
            None
        }
    }

    /// Expects a token of the specified kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise the
    /// unexpected token error for the current position.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        match self.accept(expected_kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected()),
        }
    }

    /// The error for whatever sits at the current position.
    pub fn unexpected(&self) -> Error {
        match &self.current {
            Some(token) => Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.coord,
            ),
            None => Error::new(ErrorImpl::UnexpectedEof, self.lexer.end_coord()),
        }
    }

    /// Runs `parse_fn` one nesting level deeper. Past `MAX_NESTING_DEPTH` the
    /// parse fails at the current token instead of recursing further.
    pub fn nested<T>(&mut self, parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            let position = match &self.current {
                Some(token) => token.coord,
                None => self.lexer.end_coord(),
            };
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_NESTING_DEPTH,
                },
                position,
            ));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current.is_some()
    }

    pub fn report(&mut self, error: Error) {
        self.lexer.report(error);
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Binding power of the current token, `Default` for anything that does
    /// not continue an expression.
    pub fn current_bp(&self) -> BindingPower {
        self.current_token_kind()
            .and_then(|kind| self.binding_power_lookup.get(&kind).copied())
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix or postfix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Tokens such as `-` and `(` have both roles, so this leaves the binding
    /// power table alone.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a uC source text into a `Program`.
///
/// This is the main entry point for parsing. Lexical errors are reported to
/// `sink` as they are found. The first syntax error is reported as well and
/// ends the parse with `None`.
pub fn parse(source: &str, sink: &mut dyn ErrorSink) -> Option<Program> {
    let mut parser = Parser::new(tokenize(source, sink));
    create_token_lookups(&mut parser);

    debug!("parsing {} bytes of source", source.len());

    match parse_program(&mut parser) {
        Ok(program) => {
            debug!("parsed {} global declarations", program.gdecls.len());
            Some(program)
        }
        Err(error) => {
            debug!("parse aborted at {}", error.get_position());
            parser.report(error);
            None
        }
    }
}
