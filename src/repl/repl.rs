use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use log::info;

use crate::{display_error, lexer::lexer::Lexer, parser::parser::parse};

pub const PROMPT: &str = ">> ";

/// Name given to every line read by the loop, as shown in diagnostics.
pub const SOURCE_NAME: &str = "REPL";

/// What the loop prints for every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// One line per scanned token
    #[default]
    Tokens,
    /// The parsed program in its parenthesised form, or its errors
    Ast,
}

/// Runs the loop until `input` is exhausted.
pub fn start<I: BufRead, O: Write>(input: I, mut output: O, mode: Mode) -> io::Result<()> {
    info!("starting REPL in {:?} mode", mode);

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match mode {
            Mode::Tokens => print_tokens(&line, &mut output)?,
            Mode::Ast => print_program(&line, &mut output)?,
        }
    }
}

fn print_tokens<O: Write>(line: &str, output: &mut O) -> io::Result<()> {
    for token in Lexer::new(line.as_bytes(), SOURCE_NAME) {
        writeln!(output, "{}", token)?;
    }
    Ok(())
}

fn print_program<O: Write>(line: &str, output: &mut O) -> io::Result<()> {
    let (program, errors) = parse(line.as_bytes(), SOURCE_NAME);

    if errors.is_empty() {
        return writeln!(output, "{}", program);
    }

    for error in &errors {
        write!(output, "{}", display_error(error, line, SOURCE_NAME))?;
    }
    Ok(())
}
