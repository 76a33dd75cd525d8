//! A hand-written streaming lexer for SMT-LIB v2 surface syntax.
//!
//! [`Lexer::next_token`] is the only entry point: it drives a [`Cursor`]
//! over the source text and returns tokens with their source positions.
//! Lexical errors are terminal — see [`smtlib_util::LexError`].

pub mod charclass;
pub mod cursor;
mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::Token;
