//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the scanner's token
//! stream into an Abstract Syntax Tree. It uses a Pratt parser for
//! expressions with proper operator precedence and handles:
//!
//! - Statement parsing (`let`, `return` and bare expressions)
//! - Expression parsing (literals, identifiers, prefix and infix operators)
//! - Error collection and statement-level recovery
//!
//! Prefix and infix handlers are looked up by token kind; how tightly an
//! infix operator binds comes from a static precedence table.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
