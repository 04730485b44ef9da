#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::declarations::Program,
    errors::errors::{Error, ErrorSink, ErrorTip},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column pair in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub line: u32,
    pub column: u32,
}

impl Coord {
    pub fn new(line: u32, column: u32) -> Self {
        Coord { line, column }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@ {}:{}", self.line, self.column)
    }
}

/// Owns a diagnostic sink and parses any number of sources through it.
///
/// A failed parse leaves the front end usable, so a batch of files can be
/// driven through one sink.
pub struct Frontend<S: ErrorSink> {
    sink: S,
}

impl<S: ErrorSink> Frontend<S> {
    pub fn new(sink: S) -> Self {
        Frontend { sink }
    }

    /// Parses `source`, returning `None` when a syntax error stopped the parse.
    pub fn parse(&mut self, source: &str) -> Option<Program> {
        parser::parser::parse(source, &mut self.sink)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Returns the text of the line `coord` points into, without its line break.
pub fn get_line_at_position(source: &str, coord: Coord) -> Option<&str> {
    if coord.line == 0 {
        return None;
    }

    source
        .split('\n')
        .nth((coord.line - 1) as usize)
        .map(|line| line.trim_end_matches('\r'))
}

/// Renders a diagnostic with the offending line and a caret under its column.
pub fn format_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (Unexpected token: `}`, ...)
        -> final.uc
           |
        20 | int a = #;
           | --------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let line_pos = (position.column as usize).saturating_sub(1);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (&string[start..], start)
}
