use std::fmt::{self, Display};

use crate::{lexer::tokens::Token, Location};

use super::ast::{Expression, Node};

// LITERALS

/// Identifier Expression
/// A name, as in `let x = 1;` or `x + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier {
            name: token.literal.clone(),
            token,
        }
    }
}

impl Node for Identifier {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Integer Literal Expression
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// OPERATORS

/// Prefix Expression
/// A unary operator applied to its operand, e.g. `-5` or `!ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub operand: Box<Expression>,
}

impl Node for PrefixExpression {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, self.operand)
    }
}

/// Infix Expression
/// A binary operator between two operands, e.g. `a + b`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    /// The operator token
    pub token: Token,
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl Node for InfixExpression {
    fn token(&self) -> &Token {
        &self.token
    }

    // The node's text begins with its left operand, not the operator.
    fn location(&self) -> Location {
        self.left.location()
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
