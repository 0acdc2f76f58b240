use std::{collections::HashMap, io::Read};

use lazy_static::lazy_static;

use crate::{ast::ast::Expression, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    // No call expressions yet; `(` is ranked so that `f(x)` reports a missing infix handler once.
    Call,
}

lazy_static! {
    pub static ref PRECEDENCE_LOOKUP: HashMap<TokenKind, Precedence> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Equal, Precedence::Equals);
        map.insert(TokenKind::Different, Precedence::Equals);
        map.insert(TokenKind::Lt, Precedence::LessGreater);
        map.insert(TokenKind::Gt, Precedence::LessGreater);
        map.insert(TokenKind::Lte, Precedence::LessGreater);
        map.insert(TokenKind::Gte, Precedence::LessGreater);
        map.insert(TokenKind::Plus, Precedence::Sum);
        map.insert(TokenKind::Minus, Precedence::Sum);
        map.insert(TokenKind::Asterisk, Precedence::Product);
        map.insert(TokenKind::Slash, Precedence::Product);
        map.insert(TokenKind::LParen, Precedence::Call);
        map
    };
}

/// Precedence of `kind` in infix position. Anything that is not an operator is `Lowest`.
pub fn precedence_of(kind: TokenKind) -> Precedence {
    PRECEDENCE_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(Precedence::Lowest)
}

pub type PrefixHandler<R> = fn(&mut Parser<R>) -> Option<Expression>;
pub type InfixHandler<R> = fn(&mut Parser<R>, Expression) -> Option<Expression>;

pub fn create_token_lookups<R: Read>(parser: &mut Parser<R>) {
    // Literals and symbols
    parser.prefix(TokenKind::Ident, parse_identifier);
    parser.prefix(TokenKind::Int, parse_integer_literal);

    // Unary
    parser.prefix(TokenKind::Bang, parse_prefix_expr);
    parser.prefix(TokenKind::Minus, parse_prefix_expr);
    parser.prefix(TokenKind::Plus, parse_prefix_expr);

    // Equality and relational
    parser.infix(TokenKind::Equal, parse_infix_expr);
    parser.infix(TokenKind::Different, parse_infix_expr);
    parser.infix(TokenKind::Lt, parse_infix_expr);
    parser.infix(TokenKind::Gt, parse_infix_expr);
    parser.infix(TokenKind::Lte, parse_infix_expr);
    parser.infix(TokenKind::Gte, parse_infix_expr);

    // Additive and multiplicative
    parser.infix(TokenKind::Plus, parse_infix_expr);
    parser.infix(TokenKind::Minus, parse_infix_expr);
    parser.infix(TokenKind::Asterisk, parse_infix_expr);
    parser.infix(TokenKind::Slash, parse_infix_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type PrefixLookup<R> = HashMap<TokenKind, PrefixHandler<R>>;
pub type InfixLookup<R> = HashMap<TokenKind, InfixHandler<R>>;
