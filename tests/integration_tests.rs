//! Integration tests for end-to-end lexing.
//!
//! These tests drive the public token-stream API over complete programs,
//! covering keyword/operator/delimiter recognition, position tracking
//! across lines and comments, and error recovery.

use minilang::lexer::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_lex_loop_program() {
    let source = "var x int\n\
                  x = 42\n\
                  for x > 0 {\n\
                      x = x - 1\n\
                      print x\n\
                  }\n";
    let tokens = tokenize(source.to_string(), Some("loop.lang".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Int,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::For,
            TokenKind::Ident,
            TokenKind::Greater,
            TokenKind::Number,
            TokenKind::LeftBrace,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Ident,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::RightBrace,
            TokenKind::EOF,
        ]
    );

    // `print` has no keyword kind; the parser resolves it.
    assert_eq!(tokens[16].text, "print");
    assert_eq!(tokens[16].position.line, 5);

    assert_eq!(tokens[0].position.line, 1);
    assert_eq!(tokens[0].position.column, 1);
    assert_eq!(tokens[3].position.line, 2);
    assert_eq!(tokens[3].position.column, 1);
    assert_eq!(tokens[19].position.line, 7);
    assert_eq!(tokens[19].position.column, 1);
}

#[test]
fn test_lex_conditional_program() {
    let source = "var done bool\n\
                  done = false\n\
                  if (x <= 10) && !done {\n\
                      done = true\n\
                  } else {\n\
                      done = x != 0\n\
                  }\n";
    let tokens = tokenize(source.to_string(), Some("cond.lang".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Ident,
            TokenKind::Bool,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::False,
            TokenKind::If,
            TokenKind::LeftParen,
            TokenKind::Ident,
            TokenKind::LessOrEqual,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::And,
            TokenKind::Not,
            TokenKind::Ident,
            TokenKind::LeftBrace,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::True,
            TokenKind::RightBrace,
            TokenKind::Else,
            TokenKind::LeftBrace,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Ident,
            TokenKind::NotEqual,
            TokenKind::Number,
            TokenKind::RightBrace,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_error_recovery() {
    let source = "var a int // declare\n\
                  a = } 42 ? /* trailing */\n";
    let tokens = tokenize(source.to_string(), Some("broken.lang".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Var);
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[3].kind, TokenKind::Ident);
    assert_eq!(tokens[4].kind, TokenKind::Assign);
    assert_eq!(tokens[5].kind, TokenKind::Error);
    assert_eq!(tokens[5].text, "unexpected }");
    assert_eq!(tokens[5].position.line, 2);
    assert_eq!(tokens[5].position.column, 5);
    assert_eq!(tokens[6].kind, TokenKind::Number);
    assert_eq!(tokens[6].text, "42");
    assert_eq!(tokens[7].kind, TokenKind::Error);
    assert_eq!(tokens[7].text, "unrecognized token ?");
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens[8].position.line, 3);
    assert_eq!(tokens[8].position.column, 1);
}

#[test]
fn test_lex_streaming_interface() {
    let source = "if (a) {\n}\n".to_string();
    let mut lexer = Lexer::new(source, Some("stream.lang".to_string()));

    let first = lexer.next().unwrap();
    assert_eq!(first.kind, TokenKind::If);
    assert_eq!(first.text, "if");

    let rest: Vec<TokenKind> = lexer.map(|token| token.kind).collect();
    assert_eq!(
        rest,
        vec![
            TokenKind::LeftParen,
            TokenKind::Ident,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_lex_default_file_label() {
    let tokens = tokenize("x".to_string(), None);

    assert_eq!(*tokens[0].position.file, "repl");
}
