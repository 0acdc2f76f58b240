use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Location};

use super::{
    expressions::{Identifier, InfixExpression, IntegerLiteral, PrefixExpression},
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Implemented by every node in the tree. The `Display` rendering is the
/// canonical, fully parenthesised form of the node.
pub trait Node: Display {
    /// The token the node was built around.
    fn token(&self) -> &Token;

    /// The source text of the node's defining token.
    fn token_literal(&self) -> &str {
        &self.token().literal
    }

    /// Where the source text covered by the node starts.
    fn location(&self) -> Location {
        self.token().location
    }
}

/// Statement
///
/// The closed set of statement forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => stmt.token(),
            Statement::Return(stmt) => stmt.token(),
            Statement::Expression(stmt) => stmt.token(),
        }
    }

    fn location(&self) -> Location {
        match self {
            Statement::Let(stmt) => stmt.location(),
            Statement::Return(stmt) => stmt.location(),
            Statement::Expression(stmt) => stmt.location(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// The closed set of expression forms.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Node for Expression {
    fn token(&self) -> &Token {
        match self {
            Expression::Identifier(expr) => expr.token(),
            Expression::IntegerLiteral(expr) => expr.token(),
            Expression::Prefix(expr) => expr.token(),
            Expression::Infix(expr) => expr.token(),
        }
    }

    fn location(&self) -> Location {
        match self {
            Expression::Identifier(expr) => expr.location(),
            Expression::IntegerLiteral(expr) => expr.location(),
            Expression::Prefix(expr) => expr.location(),
            Expression::Infix(expr) => expr.location(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::IntegerLiteral(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
        }
    }
}

/// The root of the tree: every statement parsed from one input, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// The literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
