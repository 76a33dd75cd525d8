//! Subcommand implementations for the smtc CLI.

pub mod check;
pub mod common;
pub mod fmt;
pub mod tokenize;

pub use check::{run_check, CheckArgs};
pub use fmt::{run_fmt, FmtArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
