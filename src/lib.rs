#![allow(clippy::module_inception)]

use std::fmt::{self, Display};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod repl;

/// A position in the source text. Both fields are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// The location of the first byte of any input.
    pub fn start() -> Self {
        Location { line: 1, column: 1 }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the text of the given 1-indexed line, without its line terminator.
pub fn get_line_at_location(source: &str, location: Location) -> Option<&str> {
    source
        .split('\n')
        .nth(location.line.checked_sub(1)? as usize)
        .map(|line| line.trim_end_matches('\r'))
}


/// Renders a parse error against the source it was reported for.
///
/// ```text
/// Error: UnexpectedToken (expected next token to be =, got INT instead)
/// -> input.gb:20:7
///    |
/// 20 | let a 1;
///    | ------^
/// ```
pub fn display_error(error: &Error, source: &str, file: &str) -> String {
    let location = *error.get_location();

    let line_string = location.line.to_string();
    let padding = line_string.len() + 2;

    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}:{}\n", file, location));
    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let Some(line_text) = get_line_at_location(source, location) else {
        return rendered;
    };

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    rendered.push_str(&format!(
        "{} | {}\n",
        line_string,
        line_text_removed.trim_end()
    ));

    // Columns count bytes, the caret line is drawn in characters.
    let byte_offset = (location.column as usize).saturating_sub(1);
    let chars_before = line_text
        .char_indices()
        .take_while(|(index, _)| *index < byte_offset)
        .count();
    let arrows = (chars_before + 1).saturating_sub(removed_whitespace).max(1);

    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
