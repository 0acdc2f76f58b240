use std::io::Read;

use crate::{
    ast::{
        ast::Expression,
        expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser};

/// Parses an expression starting at the current token, folding in infix
/// operators while they bind tighter than `precedence`.
///
/// Returns `None` when no expression could be built. The error has already
/// been recorded by then.
pub fn parse_expr<R: Read>(parser: &mut Parser<R>, precedence: Precedence) -> Option<Expression> {
    // First parse the prefix
    let token_kind = parser.current_token_kind();
    let Some(prefix_fn) = parser.get_prefix_lookup().get(&token_kind).copied() else {
        let location = parser.current_token().location;
        parser.push_error(ErrorImpl::NoPrefixParseFn { kind: token_kind }, location);
        return None;
    };

    let mut left = prefix_fn(parser)?;

    // Equal precedence stops the loop, which keeps chains left-associative
    while !parser.peek_token_is(TokenKind::Semicolon)
        && precedence < parser.peek_precedence()
    {
        let token_kind = parser.peek_token().kind;
        let Some(infix_fn) = parser.get_infix_lookup().get(&token_kind).copied() else {
            let location = parser.peek_token().location;
            parser.push_error(ErrorImpl::NoInfixParseFn { kind: token_kind }, location);
            return Some(left);
        };

        parser.advance();
        left = infix_fn(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier<R: Read>(parser: &mut Parser<R>) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_literal<R: Read>(parser: &mut Parser<R>) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
        Err(_) => {
            parser.push_error(
                ErrorImpl::IntegerParseError {
                    literal: token.literal,
                },
                token.location,
            );
            None
        }
    }
}

pub fn parse_prefix_expr<R: Read>(parser: &mut Parser<R>) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr<R: Read>(parser: &mut Parser<R>, left: Expression) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}
