//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts a byte stream
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers, integers and operators
//! - Token position tracking (1-indexed line and column) for error reporting
//! - Whitespace skipping
//!
//! The scanner never fails: anything it cannot classify becomes an
//! `ILLEGAL` token and is reported later by the parser.

pub mod lexer;
pub mod tokens;
