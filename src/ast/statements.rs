use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Location};

use super::{
    ast::{Expression, Node},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return [<value>];`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` token
    pub token: Token,
    pub value: Option<Expression>,
}

impl Node for ReturnStatement {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token_literal())?;
        if let Some(value) = &self.value {
            write!(f, " {}", value)?;
        }
        write!(f, ";")
    }
}

/// An expression used as a statement, e.g. `a + b;`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The first token of the expression
    pub token: Token,
    pub expression: Expression,
}

impl Node for ExpressionStatement {
    fn token(&self) -> &Token {
        &self.token
    }

    fn location(&self) -> Location {
        self.expression.location()
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
