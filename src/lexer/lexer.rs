use std::io::{Bytes, Read};

use log::{trace, warn};

use crate::{Location, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Sentinel held in `current_char` once the input is exhausted.
pub const EOF_CHAR: u8 = 0;

/// Longest run of operator-class characters folded into a single token.
const MAX_OPERATOR_LEN: usize = 2;

/// Character-level scanner producing one token per call to [`Lexer::next_token`].
///
/// The input is read one byte at a time, so unbuffered readers should be
/// wrapped in a `BufReader` first.
pub struct Lexer<R: Read> {
    input: Bytes<R>,
    file: String,
    current_char: u8,
    current_position: Location,
    next_position: Location,
}

impl<R: Read> Lexer<R> {
    /// Creates a scanner over `input`. `file` is only used in diagnostics.
    pub fn new(input: R, file: impl Into<String>) -> Lexer<R> {
        let mut lexer = Lexer {
            input: input.bytes(),
            file: file.into(),
            current_char: EOF_CHAR,
            current_position: Location::start(),
            next_position: Location::start(),
        };
        lexer.read_char();
        lexer
    }

    pub fn source_file(&self) -> &str {
        &self.file
    }

    fn read_char(&mut self) {
        self.current_position = self.next_position;

        let byte = match self.input.next() {
            Some(Ok(byte)) => byte,
            Some(Err(err)) => {
                warn!("failed to read from {}: {}", self.file, err);
                EOF_CHAR
            }
            None => EOF_CHAR,
        };
        self.current_char = byte;

        match byte {
            EOF_CHAR => {}
            b'\n' => {
                self.next_position.line += 1;
                self.next_position.column = 1;
            }
            _ => self.next_position.column += 1,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Consumes the current character and every following one accepted by
    /// `accept`, up to `limit` characters in total.
    fn read_while(&mut self, accept: fn(u8) -> bool, limit: usize) -> String {
        let mut read: Vec<u8> = vec![];

        while accept(self.current_char) && read.len() < limit {
            read.push(self.current_char);
            self.read_char();
        }

        // Every accepted byte is ASCII.
        read.into_iter().map(char::from).collect()
    }

    /// Consumes one unrecognized character. A multi-byte UTF-8 sequence is
    /// kept whole so the literal matches the source text.
    fn read_illegal(&mut self) -> String {
        let width = utf8_width(self.current_char);
        let mut read: Vec<u8> = vec![self.current_char];
        self.read_char();

        while read.len() < width && is_utf8_continuation(self.current_char) {
            read.push(self.current_char);
            self.read_char();
        }

        String::from_utf8_lossy(&read).into_owned()
    }

    /// Scans the next token. Once the input is exhausted this keeps returning
    /// EOF tokens at the same location.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let location = self.current_position;
        let current = self.current_char;

        let kind = match current {
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Asterisk),
            b'/' => Some(TokenKind::Slash),
            b',' => Some(TokenKind::Comma),
            b';' => Some(TokenKind::Semicolon),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b'{' => Some(TokenKind::LBrace),
            b'}' => Some(TokenKind::RBrace),
            _ => None,
        };

        let token = if let Some(kind) = kind {
            self.read_char();
            MK_TOKEN!(kind, String::from(current as char), location)
        } else if is_operator(current) {
            let literal = self.read_while(is_operator, MAX_OPERATOR_LEN);
            MK_TOKEN!(TokenKind::lookup_operator(&literal), literal, location)
        } else if is_valid_in_identifier(current) {
            let literal = self.read_while(is_valid_in_identifier, usize::MAX);
            MK_TOKEN!(TokenKind::lookup_ident(&literal), literal, location)
        } else if is_digit(current) {
            let literal = self.read_while(is_digit, usize::MAX);
            MK_TOKEN!(TokenKind::Int, literal, location)
        } else if current == EOF_CHAR {
            MK_TOKEN!(TokenKind::EOF, String::new(), location)
        } else {
            let literal = self.read_illegal();
            MK_TOKEN!(TokenKind::Illegal, literal, location)
        };

        trace!("{}:{} scanned {:?}", self.file, location, token.literal);
        token
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Token;

    /// Yields tokens up to, but not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

fn is_operator(byte: u8) -> bool {
    matches!(byte, b'=' | b'!' | b'<' | b'>')
}

fn is_valid_in_identifier(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Length of the UTF-8 sequence introduced by `byte`, 1 for anything that
/// cannot start one.
fn utf8_width(byte: u8) -> usize {
    match byte {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Scans `input` to completion. The returned tokens always end with EOF.
pub fn tokenize<R: Read>(input: R, file: impl Into<String>) -> Vec<Token> {
    let mut lex = Lexer::new(input, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
