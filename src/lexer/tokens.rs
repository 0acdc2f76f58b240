use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Location;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };

    /// Every literal the scanner can build out of operator-class characters.
    pub static ref OPERATOR_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("=", TokenKind::Assign);
        map.insert("==", TokenKind::Equal);
        map.insert("!", TokenKind::Bang);
        map.insert("!=", TokenKind::Different);
        map.insert("<", TokenKind::Lt);
        map.insert("<=", TokenKind::Lte);
        map.insert(">", TokenKind::Gt);
        map.insert(">=", TokenKind::Gte);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    Ident,
    Int,

    Assign,    // =
    Plus,      // +
    Minus,     // -
    Bang,      // !
    Asterisk,  // *
    Slash,     // /
    Lt,        // <
    Gt,        // >
    Lte,       // <=
    Gte,       // >=
    Equal,     // ==
    Different, // !=

    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Reserved
    Function,
    Return,
    Let,
    If,
    True,
    False,
}

impl TokenKind {
    /// The kind an identifier-shaped literal scans as.
    pub fn lookup_ident(literal: &str) -> TokenKind {
        RESERVED_LOOKUP
            .get(literal)
            .copied()
            .unwrap_or(TokenKind::Ident)
    }

    /// The kind an operator-shaped literal scans as. Unknown combinations are illegal.
    pub fn lookup_operator(literal: &str) -> TokenKind {
        OPERATOR_LOOKUP
            .get(literal)
            .copied()
            .unwrap_or(TokenKind::Illegal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EOF => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Bang => "!",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Lte => "<=",
            TokenKind::Gte => ">=",
            TokenKind::Equal => "==",
            TokenKind::Different => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Return => "RETURN",
            TokenKind::Let => "LET",
            TokenKind::If => "IF",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: Location,
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[TokenKind::Ident, TokenKind::Int, TokenKind::Illegal]) {
            write!(f, "{} ({}) at {}", self.kind, self.literal, self.location)
        } else {
            write!(f, "{} at {}", self.kind, self.location)
        }
    }
}
