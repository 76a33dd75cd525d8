//! A hand-written recursive-descent parser for SMT-LIB v2 surface syntax.
//!
//! [`Parser`] holds one token of lookahead over a [`smtlib_lex::Lexer`].
//! Each grammar family has its own entry point — `parse_term`,
//! `parse_sort`, `parse_command`, `parse_script`, and one
//! `parse_*_response` per response kind — since a caller always knows
//! ahead of time which production it wants; there is no single top-level
//! "parse anything" function. None of the entry points attempt error
//! recovery: a [`error::Error`] is terminal.

mod command;
mod error;
mod identifier;
mod parser;
mod qualified_identifier;
mod response;
mod sexpr;
mod term;

pub use error::{Error, Result};
pub use parser::Parser;
