//! Diagnostics produced by the front end.
//!
//! This module defines:
//!
//! - Error structures carrying the source coordinate they were found at
//! - The lexical and syntax error variants
//! - The `ErrorSink` trait shared by the lexer and the parser
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;
