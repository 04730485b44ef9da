use std::fmt::Display;

use thiserror::Error;

use crate::Coord;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Coord,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Coord) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> Coord {
        self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn category(&self) -> ErrorCategory {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::UnterminatedChar
            | ErrorImpl::MalformedChar
            | ErrorImpl::UnterminatedComment => ErrorCategory::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedEof
            | ErrorImpl::NestingTooDeep { .. } => ErrorCategory::Syntax,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::MalformedChar => "MalformedChar",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "string literals must be closed with `\"` on the line they start",
            )),
            ErrorImpl::UnterminatedChar => ErrorTip::Suggestion(String::from(
                "character constants must be closed with `'` on the line they start",
            )),
            ErrorImpl::MalformedChar => ErrorTip::Suggestion(String::from(
                "character constants hold exactly one character or escape sequence",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("block comment is missing its closing `*/`"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedEof => ErrorTip::Suggestion(String::from(
                "input ended inside a declaration or statement",
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "split the expression or statement into smaller pieces",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated character const")]
    UnterminatedChar,
    #[error("Malformed character const")]
    MalformedChar,
    #[error("Unterminated comment")]
    UnterminatedComment,
    #[error("unexpected token `{token}`")]
    UnexpectedToken { token: String },
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Receives every lexical and syntax diagnostic, in discovery order.
pub trait ErrorSink {
    fn report(&mut self, error: &Error);
}

/// Plain callbacks receive `(message, line, column)`.
impl<F> ErrorSink for F
where
    F: FnMut(&str, u32, u32),
{
    fn report(&mut self, error: &Error) {
        let position = error.get_position();
        self(&error.to_string(), position.line, position.column)
    }
}

/// Collects diagnostics so they can be inspected after a parse.
#[derive(Debug, Default, Clone)]
pub struct ErrorLog {
    errors: Vec<Error>,
}

impl ErrorLog {
    pub fn new() -> Self {
        ErrorLog { errors: vec![] }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn count(&self, category: ErrorCategory) -> usize {
        self.errors
            .iter()
            .filter(|error| error.category() == category)
            .count()
    }
}

impl ErrorSink for ErrorLog {
    fn report(&mut self, error: &Error) {
        self.errors.push(error.clone());
    }
}
