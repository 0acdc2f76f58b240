use std::io::Read;

use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expr, lookups::Precedence, parser::Parser};

/// Parses the statement starting at the current token.
///
/// On success the current token is the last one belonging to the statement.
pub fn parse_stmt<R: Read>(parser: &mut Parser<R>) -> Option<Statement> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_stmt(parser).map(Statement::Let),
        TokenKind::Return => parse_return_stmt(parser).map(Statement::Return),
        _ => parse_expression_stmt(parser).map(Statement::Expression),
    }
}

/// `let <ident> = <expr>;`, the semicolon is required.
pub fn parse_let_stmt<R: Read>(parser: &mut Parser<R>) -> Option<LetStatement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier::new(parser.current_token().clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.advance();

    let Some(value) = parse_expr(parser, Precedence::Lowest) else {
        skip_semicolon(parser);
        return None;
    };

    if !parser.expect_peek(TokenKind::Semicolon) {
        return None;
    }

    Some(LetStatement {
        token,
        name,
        value: Some(value),
    })
}

/// `return [<expr>][;]`
pub fn parse_return_stmt<R: Read>(parser: &mut Parser<R>) -> Option<ReturnStatement> {
    let token = parser.current_token().clone();

    let value = if parser.peek_token_is(TokenKind::Semicolon) || parser.peek_token_is(TokenKind::EOF)
    {
        None
    } else {
        parser.advance();
        parse_expr(parser, Precedence::Lowest)
    };

    skip_semicolon(parser);

    Some(ReturnStatement { token, value })
}

/// `<expr>[;]`
pub fn parse_expression_stmt<R: Read>(parser: &mut Parser<R>) -> Option<ExpressionStatement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    skip_semicolon(parser);

    Some(ExpressionStatement {
        token,
        expression: expression?,
    })
}

fn skip_semicolon<R: Read>(parser: &mut Parser<R>) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
