use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{errors::errors::Error, Position, MK_TOKEN};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("bool", TokenKind::Bool);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("if", TokenKind::If);
        map.insert("int", TokenKind::Int);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Error,
    Ident,

    // Literals
    False,
    Number,
    True,

    // Keywords
    Else,
    If,
    Var,
    For,

    // Types
    Bool,
    Int,

    Assign, // =

    // Arithmetic operators
    Multiply,
    Divide,
    Plus,
    Minus,

    // Relational operators
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,

    // Logical operators
    Not,
    And,
    Or,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "EOF"),
            TokenKind::Error => write!(f, "{}", self.text),
            _ if self.text.len() > 10 => {
                write!(f, "{} {:?}...", self.position, &self.text[..10])
            }
            _ => write!(f, "{} {:?}", self.position, self.text),
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![
            TokenKind::Ident,
            TokenKind::Number,
            TokenKind::Error,
        ]) {
            println!("{} ({})", self.kind, self.text);
        } else {
            println!("{} ()", self.kind);
        }
    }
}

impl From<Error> for Token {
    fn from(error: Error) -> Self {
        let text = error.message();
        MK_TOKEN!(TokenKind::Error, text, error.into_position())
    }
}
