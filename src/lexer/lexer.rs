use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl, ErrorSink},
    Coord, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the lexer positioned at the start of the match and the matched
/// text. Returns the token to emit, if any; the lexer then skips the match.
pub type RegexHandler = fn(&mut Lexer<'_>, &str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Evaluated in order, the first pattern matching at the current offset wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^/\*(?s:.)*?\*/").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new(r"^/\*(?s:.)*").unwrap(), handler: unterminated_comment_handler },
        RegexPattern { regex: Regex::new(r"^//[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\n+").unwrap(), handler: newline_handler },
        RegexPattern { regex: Regex::new(r"^[ \t\r]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r"^'(?:[^'\\\n]|\\.)'").unwrap(), handler: char_handler },
        RegexPattern { regex: Regex::new(r"^'(?:[^'\\\n]|\\.)*'").unwrap(), handler: malformed_char_handler },
        RegexPattern { regex: Regex::new(r"^'[^\n]*").unwrap(), handler: unterminated_char_handler },
        RegexPattern { regex: Regex::new(r#"^"(?:[^"\\\n]|\\.)*""#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r#"^"[^\n]*"#).unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new(r"^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new(r"^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(r"^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(r"^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new(r"^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new(r"^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new(r"^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new(r"^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
        RegexPattern { regex: Regex::new(r"^\|\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
        RegexPattern { regex: Regex::new(r"^\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"^\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        // `/*` never reaches this pattern, the comment patterns above take it first
        RegexPattern { regex: Regex::new(r"^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
        RegexPattern { regex: Regex::new(r"^\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"^\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"^\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new(r"^\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
        RegexPattern { regex: Regex::new(r"^\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
        RegexPattern { regex: Regex::new(r"^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

/// A lazy, single-pass tokenizer over a borrowed source text.
///
/// Lexical errors go to the sink and scanning carries on after the
/// offending text, so iteration always runs to the end of the input.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    sink: &'a mut dyn ErrorSink,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, sink: &'a mut dyn ErrorSink) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            sink,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        let source: &'a str = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Coordinate of the current offset. The column counts from the nearest
    /// preceding newline, so the first column of a line is 1.
    pub fn coord(&self) -> Coord {
        let last_newline = self.source[..self.pos]
            .rfind('\n')
            .map(|index| index as i64)
            .unwrap_or(-1);

        Coord::new(self.line, (self.pos as i64 - last_newline) as u32)
    }

    /// Coordinate just past the last character of the input.
    pub fn end_coord(&self) -> Coord {
        let last_newline = self
            .source
            .rfind('\n')
            .map(|index| index as i64)
            .unwrap_or(-1);

        Coord::new(self.line, (self.source.len() as i64 - last_newline) as u32)
    }

    pub fn report(&mut self, error: Error) {
        debug!("lexer reported {} {}", error, error.get_position());
        self.sink.report(&error);
    }

    fn report_here(&mut self, error_impl: ErrorImpl) {
        let coord = self.coord();
        self.report(Error::new(error_impl, coord));
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while !self.at_eof() {
            let remaining = self.remainder();
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remaining)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            match matched {
                Some((handler, text)) => {
                    let token = handler(self, text);
                    self.advance_n(text.len());

                    if token.is_some() {
                        return token;
                    }
                }
                None => {
                    let character = self.at()?;
                    self.report_here(ErrorImpl::IllegalCharacter { character });
                    self.advance_n(character.len_utf8());
                }
            }
        }

        None
    }
}

fn skip_handler(_lexer: &mut Lexer<'_>, _matched: &str) -> Option<Token> {
    None
}

fn newline_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    lexer.line += matched.len() as u32;
    None
}

fn comment_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    let newlines = matched.matches('\n').count() as u32;
    trace!("skipped block comment at line {} spanning {} newlines", lexer.line, newlines);
    lexer.line += newlines;
    None
}

fn unterminated_comment_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    lexer.report_here(ErrorImpl::UnterminatedComment);
    lexer.line += matched.matches('\n').count() as u32;
    None
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(MK_TOKEN!(kind, String::from(matched), lexer.coord()))
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::IntConst, String::from(matched), lexer.coord()))
}

fn char_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::CharConst, String::from(matched), lexer.coord()))
}

fn malformed_char_handler(lexer: &mut Lexer<'_>, _matched: &str) -> Option<Token> {
    lexer.report_here(ErrorImpl::MalformedChar);
    None
}

fn unterminated_char_handler(lexer: &mut Lexer<'_>, _matched: &str) -> Option<Token> {
    lexer.report_here(ErrorImpl::UnterminatedChar);
    None
}

fn string_handler(lexer: &mut Lexer<'_>, matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::StringLiteral, String::from(matched), lexer.coord()))
}

fn unterminated_string_handler(lexer: &mut Lexer<'_>, _matched: &str) -> Option<Token> {
    lexer.report_here(ErrorImpl::UnterminatedString);
    None
}

/// Returns a lazy token stream over `source`, reporting lexical errors to `sink`.
pub fn tokenize<'a>(source: &'a str, sink: &'a mut dyn ErrorSink) -> Lexer<'a> {
    Lexer::new(source, sink)
}
