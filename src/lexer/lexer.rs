use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENT_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Streaming lexer over one input source.
///
/// Tokens are produced on demand through the `Iterator` implementation.
/// The stream ends with a single `EOF` token; a lexer is not reusable
/// after that.
pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    braces: u32,
    parens: u32,
    file: Rc<String>,
    done: bool,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("repl"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            braces: 0,
            parens: 0,
            file: file_name,
            done: false,
        }
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    /// Consumes one character, keeping the line/column counters in step.
    fn bump(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Consumes `n` bytes of a lexeme that contains no line breaks.
    fn advance_n(&mut self, n: usize) {
        self.pos += n;
        self.column += n as u32;
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.at() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.remainder().starts_with("//") => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('/') if self.remainder().starts_with("/*") => {
                    self.bump();
                    self.bump();

                    // Comments never nest; the first closing marker wins.
                    while !self.at_eof() && !self.remainder().starts_with("*/") {
                        self.bump();
                    }

                    self.bump();
                    self.bump();
                }
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = Lexer::position(self);

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new(), position);
        }

        if let Some(matched) = IDENT_PATTERN.find(self.remainder()) {
            let text = String::from(matched.as_str());
            let length = matched.end();
            self.advance_n(length);

            let kind = if let Some(kind) = RESERVED_LOOKUP.get(text.as_str()) {
                *kind
            } else {
                TokenKind::Ident
            };

            return MK_TOKEN!(kind, text, position);
        }

        if let Some(matched) = NUMBER_PATTERN.find(self.remainder()) {
            let text = String::from(matched.as_str());
            let length = matched.end();
            self.advance_n(length);

            return MK_TOKEN!(TokenKind::Number, text, position);
        }

        let c = match self.bump() {
            Some(c) => c,
            None => return MK_TOKEN!(TokenKind::EOF, String::new(), position),
        };

        match c {
            '*' => MK_TOKEN!(TokenKind::Multiply, String::from(c), position),
            '/' => MK_TOKEN!(TokenKind::Divide, String::from(c), position),
            '+' => MK_TOKEN!(TokenKind::Plus, String::from(c), position),
            '-' => MK_TOKEN!(TokenKind::Minus, String::from(c), position),
            '=' => self.emit_if_next(c, '=', TokenKind::Equal, TokenKind::Assign, position),
            '<' => self.emit_if_next(c, '=', TokenKind::LessOrEqual, TokenKind::Less, position),
            '>' => self.emit_if_next(c, '=', TokenKind::GreaterOrEqual, TokenKind::Greater, position),
            '!' => self.emit_if_next(c, '=', TokenKind::NotEqual, TokenKind::Not, position),
            '&' => self.expect_next(c, '&', TokenKind::And, position),
            '|' => self.expect_next(c, '|', TokenKind::Or, position),
            '{' => {
                self.braces += 1;
                MK_TOKEN!(TokenKind::LeftBrace, String::from(c), position)
            }
            '}' => {
                if self.braces == 0 {
                    Token::from(Error::new(
                        ErrorImpl::UnbalancedDelimiter { delimiter: '}' },
                        position,
                    ))
                } else {
                    self.braces -= 1;
                    MK_TOKEN!(TokenKind::RightBrace, String::from(c), position)
                }
            }
            '(' => {
                self.parens += 1;
                MK_TOKEN!(TokenKind::LeftParen, String::from(c), position)
            }
            ')' => {
                if self.parens == 0 {
                    Token::from(Error::new(
                        ErrorImpl::UnbalancedDelimiter { delimiter: ')' },
                        position,
                    ))
                } else {
                    self.parens -= 1;
                    MK_TOKEN!(TokenKind::RightParen, String::from(c), position)
                }
            }
            _ => Token::from(Error::new(
                ErrorImpl::UnrecognizedToken {
                    token: String::from(c),
                },
                position,
            )),
        }
    }

    /// Emits a token of kind `double` if `next` matches the lookahead,
    /// consuming it. Otherwise a token of kind `single` is emitted.
    fn emit_if_next(
        &mut self,
        first: char,
        next: char,
        double: TokenKind,
        single: TokenKind,
        position: Position,
    ) -> Token {
        if self.at() == Some(next) {
            self.bump();
            MK_TOKEN!(double, format!("{}{}", first, next), position)
        } else {
            MK_TOKEN!(single, String::from(first), position)
        }
    }

    /// Emits a token of kind `kind` if `next` matches the lookahead,
    /// consuming it. Otherwise an error token is emitted and the
    /// lookahead character is left in place.
    fn expect_next(
        &mut self,
        first: char,
        next: char,
        kind: TokenKind,
        position: Position,
    ) -> Token {
        if self.at() == Some(next) {
            self.bump();
            MK_TOKEN!(kind, format!("{}{}", first, next), position)
        } else {
            Token::from(Error::new(
                ErrorImpl::ExpectedOperator {
                    operator: format!("{}{}", first, next),
                },
                position,
            ))
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.scan_token();

        if token.kind == TokenKind::EOF {
            self.done = true;
        }

        Some(token)
    }
}

/// Scans the whole source and collects the token stream, including the
/// terminating EOF token. Lexical errors appear in the stream as
/// error-kind tokens.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    Lexer::new(source, file).collect()
}
