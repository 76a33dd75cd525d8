//! S-expression printing.
//!
//! The `Command`/`Term` wrapper variants delegate straight to those
//! families' own printers, so printing an embedded node always matches
//! printing it directly — the whole reason those variants wrap instead of
//! re-deriving text.

use std::io::{self, Write};

use smtlib_ast::sexpr::SExpr;

use crate::canonical::format_keyword;
use crate::command::print_command;
use crate::literal::print_literal;
use crate::term::print_term;

pub fn print_sexpr<W: Write>(w: &mut W, sexpr: &SExpr) -> io::Result<()> {
    match sexpr {
        SExpr::Literal(lit) => print_literal(w, lit),
        SExpr::Symbol(symbol) => write!(w, "{}", crate::canonical::format_symbol(symbol)),
        SExpr::Keyword(keyword) => write!(w, "{}", format_keyword(keyword)),
        SExpr::List(items) => {
            write!(w, "(")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(w, " ")?;
                }
                print_sexpr(w, item)?;
            }
            write!(w, ")")
        }
        SExpr::Command(command) => print_command(w, command),
        SExpr::Term(term) => print_term(w, term),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtlib_ast::symbol::Symbol;

    fn to_string(sexpr: &SExpr) -> String {
        let mut buf = Vec::new();
        print_sexpr(&mut buf, sexpr).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn list_prints_space_separated_items() {
        let sexpr = SExpr::list(vec![SExpr::symbol("a"), SExpr::symbol("b")]);
        assert_eq!(to_string(&sexpr), "(a b)");
    }

    #[test]
    fn quoted_symbol_in_list() {
        let sexpr = SExpr::list(vec![SExpr::Symbol(Symbol::new("a b"))]);
        assert_eq!(to_string(&sexpr), "(|a b|)");
    }
}
