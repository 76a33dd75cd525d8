//! Printers for the SMT-LIB v2 AST: canonical text out of every family in
//! `smtlib-ast`.
//!
//! Two printers exist for terms (and, transitively, for the commands and
//! scripts that embed them): [`term::print_term`] recurses directly and
//! [`term::print_term_stack_safe`] recurses over an explicit work-stack.
//! Both produce byte-identical output; only the stack-safety guarantee
//! differs. Every other family (sorts, identifiers, s-expressions) is
//! printed with ordinary recursion, since nothing in the grammar lets
//! those nest to unbounded depth the way `let`-chains and nested function
//! applications can.

mod canonical;
mod command;
mod identifier;
mod literal;
mod response;
mod sexpr;
mod term;

pub use canonical::{format_keyword, format_string_literal, format_symbol};
pub use command::{print_command, print_command_stack_safe, print_script, print_script_stack_safe};
pub use identifier::{print_identifier, print_qualified_identifier, print_sort};
pub use literal::print_literal;
pub use response::print_response;
pub use sexpr::print_sexpr;
pub use term::{print_term, print_term_stack_safe};

/// Renders any printer function's output into an owned `String`.
/// Convenience for callers (tests, the CLI) that don't already hold a
/// `Write` sink.
pub fn to_string<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).expect("writing to an in-memory buffer cannot fail");
    String::from_utf8(buf).expect("printer only ever emits UTF-8")
}
