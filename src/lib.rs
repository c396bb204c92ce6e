#![allow(clippy::module_inception)]

use std::{fmt::Display, fs, path::PathBuf, rc::Rc};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Source position of a token: filename label, 1-based line and column.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

pub fn get_line_at_position(file: PathBuf, line_number: u32) -> String {
    let content = fs::read_to_string(&file).unwrap();

    let mut number = 1;

    for line in content.split_inclusive('\n') {
        if number == line_number {
            return line.to_string();
        }

        number += 1;
    }

    panic!("Line number exceeds file length");
}


pub fn display_error(message: &str, position: &Position, file: PathBuf) {
    /*
        Error: message
        -> final.lang
           |
        20 | var a = #
           | --------^
    */

    let line_text = get_line_at_position(file.clone(), position.line);

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    println!("Error: {}", message);
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = position.column as usize - removed_whitespace;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
