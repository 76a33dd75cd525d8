//! The error type surfaced at the parser's public boundary.

use smtlib_util::{LexError, ParseError, Position};

/// Either of the two terminal error kinds: a malformed token from the
/// lexer, or a well-formed token the grammar doesn't accept here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    pub fn position(&self) -> Position {
        match self {
            Error::Lex(e) => e.position(),
            Error::Parse(e) => e.position,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
