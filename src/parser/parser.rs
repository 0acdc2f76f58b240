//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program-level
//! parsing loop. The parser keeps two tokens in view (current and peek)
//! and dispatches expressions through lookup tables of:
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for operators that continue one
//!
//! Failures never abort the parse. Each one is recorded as an [`Error`]
//! and the parser resumes at the next statement.

use std::{collections::HashMap, io::Read, mem};

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Location,
};

use super::{
    lookups::{
        create_token_lookups, precedence_of, InfixHandler, InfixLookup, Precedence,
        PrefixHandler, PrefixLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// The handler tables are filled once in [`Parser::new`] and never change
/// afterwards.
pub struct Parser<R: Read> {
    /// Source of tokens
    lexer: Lexer<R>,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Every error recorded so far, in the order found
    errors: Vec<Error>,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup<R>,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup<R>,
}

impl<R: Read> Parser<R> {
    /// Creates a new Parser and primes the current and peek tokens.
    pub fn new(mut lexer: Lexer<R>) -> Self {
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            errors: vec![],
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until EOF.
    ///
    /// Statements that fail to parse are left out of the returned program;
    /// their errors are available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }

    pub fn lexer(&self) -> &Lexer<R> {
        &self.lexer
    }

    /// Returns the errors recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current_token.is(kind)
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    pub fn current_precedence(&self) -> Precedence {
        precedence_of(self.current_token.kind)
    }

    pub fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }

    /// Shifts the peek token into the current slot and scans a new peek token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    /// Advances if the peek token is of the expected kind, otherwise records
    /// an error located at the peek token and stays put.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_is(expected) {
            self.advance();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let Token { kind, location, .. } = self.peek_token;
        self.push_error(
            ErrorImpl::UnexpectedToken {
                expected,
                found: kind,
            },
            location,
        );
    }

    /// Records an error, unless the token at `location` already has one.
    ///
    /// Enclosing `parse_expr` frames and the statement that gives up after
    /// them all see the same offending token.
    pub fn push_error(&mut self, error: ErrorImpl, location: Location) {
        if self
            .errors
            .last()
            .is_some_and(|last| *last.get_location() == location)
        {
            debug!(
                "{}:{}: {} (token already reported)",
                self.lexer.source_file(),
                location,
                error
            );
            return;
        }

        debug!("{}:{}: {}", self.lexer.source_file(), location, error);
        self.errors.push(Error::new(error, location));
    }

    /// Returns a reference to the prefix handler lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup<R> {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix handler lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup<R> {
        &self.infix_lookup
    }

    /// Registers a prefix handler for a token.
    pub(super) fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler<R>) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers an infix handler for a token. Its precedence comes from
    /// the static precedence table.
    pub(super) fn infix(&mut self, kind: TokenKind, infix_fn: InfixHandler<R>) {
        self.infix_lookup.insert(kind, infix_fn);
    }
}

/// Parses `input` into a program.
///
/// This is the main entry point for parsing. It creates a scanner and a
/// parser, parses every statement until EOF and hands back the program
/// together with every error found. A non-empty error list does not mean
/// the program is empty; callers decide which errors are fatal to them.
pub fn parse<R: Read>(input: R, file: impl Into<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(input, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
