//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the lexer's token stream
//! into a uC `Program`. It uses a Pratt parser for expressions with proper
//! operator precedence and handles:
//!
//! - Global declarations and function definitions
//! - Declarators with array and function suffixes
//! - Statement parsing (compound, control flow, print/read/assert)
//! - Expression parsing (binary and unary ops, casts, calls, subscripts)
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
