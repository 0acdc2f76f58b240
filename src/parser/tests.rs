//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - `let` and `return` statements
//! - Identifiers and integer literals
//! - Prefix and infix expressions, precedence and associativity
//! - Error collection and recovery

use test_log::test;

use crate::{
    ast::ast::{Expression, Node, Program, Statement},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::TokenKind},
    Location,
};

use super::parser::{parse, Parser};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source.as_bytes(), "test.gb");

    assert!(
        errors.is_empty(),
        "parser has {} errors: {:?}",
        errors.len(),
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
    );

    program
}

fn single_expression(program: &Program) -> &Expression {
    assert_eq!(program.len(), 1, "expected exactly one statement");

    match &program.statements[0] {
        Statement::Expression(stmt) => &stmt.expression,
        other => panic!("statement is not an expression statement, got {:?}", other),
    }
}

fn assert_integer_literal(expr: &Expression, expected: i64) {
    match expr {
        Expression::IntegerLiteral(integer) => {
            assert_eq!(integer.value, expected);
            assert_eq!(integer.token_literal(), expected.to_string());
        }
        other => panic!("expression is not an integer literal, got {:?}", other),
    }
}

fn assert_let_statement(stmt: &Statement, expected_name: &str) {
    assert_eq!(stmt.token_literal(), "let");

    match stmt {
        Statement::Let(let_stmt) => {
            assert_eq!(let_stmt.name.name, expected_name);
            assert_eq!(let_stmt.name.token_literal(), expected_name);
        }
        other => panic!("statement is not a let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok(
        "
let a = 1;
let b = +47138471;
let something = -47194738292;
",
    );

    assert_eq!(program.len(), 3);
    assert_let_statement(&program.statements[0], "a");
    assert_let_statement(&program.statements[1], "b");
    assert_let_statement(&program.statements[2], "something");
    assert_eq!(
        program.to_string(),
        "let a = 1;let b = (+47138471);let something = (-47194738292);"
    );
}

#[test]
fn test_parse_let_statement_value() {
    let program = parse_ok("let x = 5 * y + 2;");

    match &program.statements[0] {
        Statement::Let(stmt) => {
            let value = stmt.value.as_ref().expect("let statement has no value");
            assert_eq!(value.to_string(), "((5 * y) + 2)");
        }
        other => panic!("statement is not a let statement, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statement_errors() {
    let (program, errors) = parse(
        "
let a = 1;
let a = 1
let a 1;
let 1;
"
        .as_bytes(),
        "test.gb",
    );

    let expected = vec![
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Semicolon,
                found: TokenKind::Let,
            },
            Location::new(4, 1),
        ),
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Assign,
                found: TokenKind::Int,
            },
            Location::new(4, 7),
        ),
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Ident,
                found: TokenKind::Int,
            },
            Location::new(5, 5),
        ),
    ];

    assert_eq!(errors, expected);
    assert_eq!(
        errors[0].message(),
        "expected next token to be ;, got LET instead"
    );
    assert_eq!(
        errors[1].message(),
        "expected next token to be =, got INT instead"
    );
    assert_eq!(
        errors[2].message(),
        "expected next token to be IDENT, got INT instead"
    );

    // The statements after each failure are still parsed.
    assert_let_statement(&program.statements[0], "a");
    assert!(program
        .iter()
        .skip(1)
        .all(|stmt| matches!(stmt, Statement::Expression(_))));
}

#[test]
fn test_parse_let_statement_missing_semicolon_at_eof() {
    let (program, errors) = parse("let a = 1".as_bytes(), "test.gb");

    assert!(program.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message(),
        "expected next token to be ;, got EOF instead"
    );
    assert_eq!(*errors[0].get_location(), Location::new(1, 10));
}

#[test]
fn test_parse_let_statement_missing_value() {
    let (program, errors) = parse("let a = ;\nlet b = 2;".as_bytes(), "test.gb");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "no prefix parse function for ;");
    assert_eq!(program.len(), 1);
    assert_let_statement(&program.statements[0], "b");
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok(
        "
return 5;
return 10;
return 993322;
",
    );

    assert_eq!(program.len(), 3);

    let expected = [5, 10, 993322];
    for (stmt, expected) in program.iter().zip(expected) {
        match stmt {
            Statement::Return(return_stmt) => {
                assert_eq!(return_stmt.token_literal(), "return");
                assert_integer_literal(
                    return_stmt.value.as_ref().expect("return has no value"),
                    expected,
                );
            }
            other => panic!("statement is not a return statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_bare_return() {
    let program = parse_ok("return; return");

    assert_eq!(program.len(), 2);
    assert_eq!(program.to_string(), "return;return;");
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_ok("someIdentifier;");

    match single_expression(&program) {
        Expression::Identifier(identifier) => {
            assert_eq!(identifier.name, "someIdentifier");
            assert_eq!(identifier.token_literal(), "someIdentifier");
        }
        other => panic!("expression is not an identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_integer_literal() {
    let program = parse_ok("3;");

    assert_integer_literal(single_expression(&program), 3);
}

#[test]
fn test_parse_prefix_expressions() {
    let tests = [
        ("-5", "-", 5),
        ("!2", "!", 2),
        ("-7;", "-", 7),
        ("+99182346;", "+", 99182346),
    ];

    for (source, operator, value) in tests {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_integer_literal(&prefix.operand, value);
            }
            other => panic!("{}: expression is not a prefix expression, got {:?}", source, other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let tests = [
        ("3 - 2", "-", 3, 2),
        ("7 + 9", "+", 7, 9),
        ("1 * 16", "*", 1, 16),
        ("16 / 8", "/", 16, 8),
        ("30 > 60", ">", 30, 60),
        ("90 < 80", "<", 90, 80),
        ("1 == 0", "==", 1, 0),
        ("0 >= 20", ">=", 0, 20),
        ("4 <= 10", "<=", 4, 10),
        ("5 != 29", "!=", 5, 29),
    ];

    for (source, operator, left, right) in tests {
        let program = parse_ok(source);

        match single_expression(&program) {
            Expression::Infix(infix) => {
                assert_eq!(infix.operator, operator, "{}", source);
                assert_integer_literal(&infix.left, left);
                assert_integer_literal(&infix.right, right);
            }
            other => panic!("{}: expression is not an infix expression, got {:?}", source, other),
        }
    }
}

#[test]
fn test_parse_operator_precedence() {
    let tests = [
        ("3 - 2", "(3 - 2)"),
        ("a + b + c", "((a + b) + c)"),
        ("a - b - c", "((a - b) - c)"),
        ("a + b * c", "(a + (b * c))"),
        ("a * b / c + d", "(((a * b) / c) + d)"),
        ("!a <= b", "((!a) <= b)"),
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b - c", "((a + b) - c)"),
        ("a < b == c > d", "((a < b) == (c > d))"),
        ("a == b != c", "((a == b) != c)"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
    ];

    for (source, expected) in tests {
        let program = parse_ok(source);
        assert_eq!(program.to_string(), expected, "{}", source);
    }
}

#[test]
fn test_semicolons_are_optional_between_expressions() {
    let program = parse_ok("a + b; c\n-d");

    // Without a separator `-` continues the previous expression.
    assert_eq!(program.len(), 2);
    assert_eq!(program.statements[0].to_string(), "(a + b)");
    assert_eq!(program.statements[1].to_string(), "(c - d)");
}

#[test]
fn test_integer_overflow() {
    let (program, errors) = parse("9223372036854775808; 9223372036854775807;".as_bytes(), "test.gb");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].get_kind(),
        &ErrorImpl::IntegerParseError {
            literal: "9223372036854775808".to_string()
        }
    );
    assert_eq!(*errors[0].get_location(), Location::new(1, 1));

    assert_eq!(program.len(), 1);
    assert_integer_literal(single_expression(&program), i64::MAX);
}

#[test]
fn test_illegal_token_reports_missing_prefix() {
    let (program, errors) = parse("let a = 1;\n@;\nlet b = 2;".as_bytes(), "test.gb");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "no prefix parse function for ILLEGAL");
    assert_eq!(*errors[0].get_location(), Location::new(2, 1));
    assert_eq!(program.len(), 2);
    assert_let_statement(&program.statements[1], "b");
}

#[test]
fn test_call_syntax_reports_missing_infix() {
    let (program, errors) = parse("add(1)".as_bytes(), "test.gb");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message(), "no infix parse function for (");
    assert_eq!(*errors[0].get_location(), Location::new(1, 4));
    assert_eq!(errors[1].to_string(), "1:6: no prefix parse function for )");
    assert_eq!(program.statements[0].to_string(), "add");
}

#[test]
fn test_missing_infix_is_reported_once_per_token() {
    let cases = [
        (
            "a + b(c);",
            vec![
                "1:6: no infix parse function for (",
                "1:8: no prefix parse function for )",
            ],
            vec!["(a + b)", "c"],
        ),
        (
            "a + b * c(d);",
            vec![
                "1:10: no infix parse function for (",
                "1:12: no prefix parse function for )",
            ],
            vec!["(a + (b * c))", "d"],
        ),
        (
            "let x = f(1);",
            vec![
                "1:10: no infix parse function for (",
                "1:12: no prefix parse function for )",
            ],
            vec!["1"],
        ),
    ];

    for (source, expected_errors, expected_statements) in cases {
        let (program, errors) = parse(source.as_bytes(), "test.gb");

        let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
        assert_eq!(messages, expected_errors, "errors for {:?}", source);

        let rendered: Vec<String> = program.iter().map(|stmt| stmt.to_string()).collect();
        assert_eq!(rendered, expected_statements, "statements for {:?}", source);
    }
}

#[test]
fn test_failed_operand_drops_statement() {
    let (program, errors) = parse("1 + ;\n2 * 3;".as_bytes(), "test.gb");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "no prefix parse function for ;");
    assert_eq!(program.len(), 1);
    assert_eq!(program.to_string(), "(2 * 3)");
}

#[test]
fn test_node_locations() {
    let program = parse_ok("let x = 1;\n  y * -2");

    let let_stmt = &program.statements[0];
    assert_eq!(let_stmt.location(), Location::new(1, 1));

    let expr = single_expression(&Program {
        statements: program.statements[1..].to_vec(),
    })
    .clone();
    assert_eq!(expr.location(), Location::new(2, 3));
    assert_eq!(expr.token().location, Location::new(2, 5));

    match expr {
        Expression::Infix(infix) => {
            assert_eq!(infix.right.location(), Location::new(2, 7));
            match *infix.right {
                Expression::Prefix(prefix) => {
                    assert_eq!(prefix.operand.location(), Location::new(2, 8))
                }
                other => panic!("expected prefix expression, got {:?}", other),
            }
        }
        other => panic!("expected infix expression, got {:?}", other),
    }
}

#[test]
fn test_parser_accessors() {
    let mut parser = Parser::new(Lexer::new("x + ;".as_bytes(), "accessors.gb"));

    assert_eq!(parser.current_token().literal, "x");
    assert_eq!(parser.peek_token().literal, "+");
    assert!(parser.get_prefix_lookup().contains_key(&TokenKind::Ident));
    assert!(parser.get_infix_lookup().contains_key(&TokenKind::Plus));
    assert!(!parser.get_infix_lookup().contains_key(&TokenKind::LParen));

    parser.parse_program();

    assert_eq!(parser.lexer().source_file(), "accessors.gb");
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(parser.into_errors()[0].message(), "no prefix parse function for ;");
}

#[test]
fn test_empty_input() {
    let program = parse_ok("");
    assert!(program.is_empty());

    let program = parse_ok("   \n\t ");
    assert!(program.is_empty());
}
