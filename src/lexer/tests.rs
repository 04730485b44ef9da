//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer, character and string constants
//! - Operators and delimiters
//! - Comments and line tracking
//! - Lexical error recovery

use crate::errors::errors::{ErrorCategory, ErrorImpl, ErrorLog};
use crate::Coord;

use super::{
    lexer::tokenize,
    tokens::{Token, TokenKind},
};

fn lex(source: &str) -> (Vec<Token>, ErrorLog) {
    let mut log = ErrorLog::new();
    let tokens = tokenize(source, &mut log).collect::<Vec<Token>>();
    (tokens, log)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let (tokens, log) = lex("assert break char else for if int print read return void while");

    assert!(log.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Assert,
            TokenKind::Break,
            TokenKind::Char,
            TokenKind::Else,
            TokenKind::For,
            TokenKind::If,
            TokenKind::Int,
            TokenKind::Print,
            TokenKind::Read,
            TokenKind::Return,
            TokenKind::Void,
            TokenKind::While,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, _) = lex("foo baz_123 _underscore CamelCase printer int2 whiles");

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].value, "printer");
    assert_eq!(tokens[5].value, "int2");
    assert_eq!(tokens[6].value, "whiles");
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_tokenize_int_constants() {
    let (tokens, log) = lex("42 0 007 123abc");

    assert!(log.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::IntConst);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "0");
    assert_eq!(tokens[2].value, "007");
    assert_eq!(tokens[3].kind, TokenKind::IntConst);
    assert_eq!(tokens[3].value, "123");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "abc");
}

#[test]
fn test_tokenize_char_constants() {
    let (tokens, log) = lex(r"'a' '\n' '\'' ' '");

    assert!(log.is_empty());
    assert_eq!(kinds(&tokens), vec![TokenKind::CharConst; 4]);
    assert_eq!(tokens[0].value, "'a'");
    assert_eq!(tokens[1].value, r"'\n'");
    assert_eq!(tokens[2].value, r"'\''");
    assert_eq!(tokens[3].value, "' '");
}

#[test]
fn test_tokenize_strings() {
    let (tokens, log) = lex(r#""hello" "" "say \"hi\"" "a\\""#);

    assert!(log.is_empty());
    assert_eq!(kinds(&tokens), vec![TokenKind::StringLiteral; 4]);
    assert_eq!(tokens[0].value, r#""hello""#);
    assert_eq!(tokens[1].value, r#""""#);
    assert_eq!(tokens[2].value, r#""say \"hi\"""#);
    assert_eq!(tokens[3].value, r#""a\\""#);
}

#[test]
fn test_tokenize_operators() {
    let (tokens, log) = lex("+ - * / % == != < > <= >= = && || !");

    assert!(log.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
        ]
    );
}

#[test]
fn test_tokenize_longest_operator_wins() {
    let (tokens, _) = lex("a<=b==c!=d=e");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    let (tokens, _) = lex("( ) [ ] { } , ;");

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_division_is_not_a_comment() {
    let (tokens, log) = lex("a / b /* c */ / d");

    assert!(log.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "int x; // trailing comment\n/* block\n comment */ int y;";
    let (tokens, log) = lex(source);

    assert!(log.is_empty());
    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].coord, Coord::new(1, 1));
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].coord, Coord::new(3, 13));
    assert_eq!(tokens[4].value, "y");
    assert_eq!(tokens[4].coord.line, 3);
}

#[test]
fn test_block_comment_lines_are_counted() {
    let (tokens, _) = lex("/* a \n b */\nint x;");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].coord, Coord::new(3, 1));
}

#[test]
fn test_tokenize_coordinates() {
    let (tokens, _) = lex("int main() {\n\n    return 0;\n}");

    assert_eq!(tokens[0].coord, Coord::new(1, 1));
    assert_eq!(tokens[1].coord, Coord::new(1, 5));
    assert_eq!(tokens[2].coord, Coord::new(1, 9));
    assert_eq!(tokens[4].coord, Coord::new(1, 12));
    assert_eq!(tokens[5].value, "return");
    assert_eq!(tokens[5].coord, Coord::new(3, 5));
    assert_eq!(tokens[6].coord, Coord::new(3, 12));
    assert_eq!(tokens[8].coord, Coord::new(4, 1));
}

#[test]
fn test_unterminated_comment() {
    let (tokens, log) = lex("int x;\n/* never\nclosed");

    assert_eq!(tokens.len(), 3);
    assert_eq!(log.len(), 1);
    assert_eq!(log.errors()[0].get_impl(), &ErrorImpl::UnterminatedComment);
    assert_eq!(log.errors()[0].get_position(), Coord::new(2, 1));
}

#[test]
fn test_unterminated_comment_alone_yields_no_token() {
    let (tokens, log) = lex("/*");

    assert!(tokens.is_empty());
    assert_eq!(log.len(), 1);
    assert_eq!(log.count(ErrorCategory::Lexical), 1);
}

#[test]
fn test_unterminated_string() {
    let (tokens, log) = lex("print(\"oops);\nx;");

    assert_eq!(log.len(), 1);
    assert_eq!(log.errors()[0].get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(log.errors()[0].get_position(), Coord::new(1, 7));
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Print,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[2].coord, Coord::new(2, 1));
}

#[test]
fn test_unterminated_literals_ending_in_backslash() {
    let (tokens, log) = lex("x = \"abc\\\ny;");

    assert_eq!(log.len(), 1, "expected one error: {:?}", log.errors());
    assert_eq!(log.errors()[0].get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(log.errors()[0].get_position(), Coord::new(1, 5));
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens[2].coord, Coord::new(2, 1));

    let (tokens, log) = lex("c = 'a\\\nd");

    assert_eq!(log.len(), 1, "expected one error: {:?}", log.errors());
    assert_eq!(log.errors()[0].get_impl(), &ErrorImpl::UnterminatedChar);
    assert_eq!(log.errors()[0].get_position(), Coord::new(1, 5));
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].value, "d");
}

#[test]
fn test_malformed_and_unterminated_chars() {
    let (tokens, log) = lex("'ab' ''\n'c\nx");

    assert_eq!(log.len(), 3);
    assert_eq!(log.errors()[0].get_impl(), &ErrorImpl::MalformedChar);
    assert_eq!(log.errors()[1].get_impl(), &ErrorImpl::MalformedChar);
    assert_eq!(log.errors()[1].get_position(), Coord::new(1, 6));
    assert_eq!(log.errors()[2].get_impl(), &ErrorImpl::UnterminatedChar);
    assert_eq!(log.errors()[2].get_position(), Coord::new(2, 1));
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "x");
}

#[test]
fn test_illegal_characters_are_skipped() {
    let (tokens, log) = lex("int @x = 1 $;");

    assert_eq!(log.len(), 2);
    assert_eq!(
        log.errors()[0].get_impl(),
        &ErrorImpl::IllegalCharacter { character: '@' }
    );
    assert_eq!(log.errors()[0].get_position(), Coord::new(1, 5));
    assert_eq!(log.errors()[1].to_string(), "Illegal character '$'");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::IntConst,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_tokenize_is_lazy() {
    let mut log = ErrorLog::new();
    let mut lexer = tokenize("a @ b", &mut log);

    assert_eq!(lexer.next().map(|token| token.value), Some("a".to_string()));
    assert_eq!(lexer.next().map(|token| token.value), Some("b".to_string()));
    assert_eq!(lexer.next(), None);
    assert_eq!(lexer.next(), None);
    drop(lexer);

    assert_eq!(log.len(), 1);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let (tokens, log) = lex("  int\t\tx \r\n  ;  ");

    assert!(log.is_empty());
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Int, TokenKind::Identifier, TokenKind::Semicolon]
    );
    assert_eq!(tokens[2].coord, Coord::new(2, 3));
}
