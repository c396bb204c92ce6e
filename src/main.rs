use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use minilang::{
    display_error,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let file_contents = read_to_string(file_path).expect("Failed to read file!");

    let start = Instant::now();
    let mut error_count = 0;

    for token in Lexer::new(file_contents, Some(String::from(file_name))) {
        match token.kind {
            TokenKind::Error => {
                display_error(&token.text, &token.position, PathBuf::from(file_path));
                error_count += 1;
            }
            _ => token.debug(),
        }
    }

    println!("Tokenized in {:?}", start.elapsed());

    if error_count > 0 {
        println!("Found {} lexical error(s)", error_count);
        exit(1);
    }
}
