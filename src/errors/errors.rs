use thiserror::Error;

use crate::Position;

/// A lexical error bound to the position of the offending lexeme.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn into_position(self) -> Position {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedOperator { .. } => "ExpectedOperator",
            ErrorImpl::UnbalancedDelimiter { .. } => "UnbalancedDelimiter",
            ErrorImpl::UnrecognizedToken { .. } => "UnrecognizedToken",
        }
    }

    /// The diagnostic message, as it appears in the token stream.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("expected {operator} operator")]
    ExpectedOperator { operator: String },
    #[error("unexpected {delimiter}")]
    UnbalancedDelimiter { delimiter: char },
    #[error("unrecognized token {token}")]
    UnrecognizedToken { token: String },
}
