//! Lexical analysis for uC.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a lazy stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using ordered regex patterns
//! - Recognition of keywords, identifiers, constants and operators
//! - Line and column tracking for every token
//! - Comments and whitespace, which produce no tokens
//! - Lexical errors, which are reported and skipped

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
