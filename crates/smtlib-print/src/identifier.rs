//! Printing for identifiers, sorts, and qualified identifiers.
//!
//! None of these three families can nest to unbounded depth in practice
//! (sort nesting tracks a logic's own type grammar, not a script's term
//! structure), so both printers use the same direct recursion here; only
//! [`crate::term`] has a dedicated stack-safe path.

use std::io::{self, Write};

use smtlib_ast::identifier::Identifier;
use smtlib_ast::qualified_identifier::QualifiedIdentifier;
use smtlib_ast::sort::Sort;

use crate::canonical::format_symbol;

pub fn print_identifier<W: Write>(w: &mut W, identifier: &Identifier) -> io::Result<()> {
    match identifier {
        Identifier::Simple(symbol) => write!(w, "{}", format_symbol(symbol)),
        Identifier::Indexed { symbol, indices } => {
            write!(w, "(_ {}", format_symbol(symbol))?;
            for index in indices {
                write!(w, " {}", index.to_canonical_string())?;
            }
            write!(w, ")")
        }
    }
}

pub fn print_sort<W: Write>(w: &mut W, sort: &Sort) -> io::Result<()> {
    if sort.is_leaf() {
        print_identifier(w, sort.identifier())
    } else {
        write!(w, "(")?;
        print_identifier(w, sort.identifier())?;
        for sub in sort.subsorts() {
            write!(w, " ")?;
            print_sort(w, sub)?;
        }
        write!(w, ")")
    }
}

pub fn print_qualified_identifier<W: Write>(
    w: &mut W,
    qid: &QualifiedIdentifier,
) -> io::Result<()> {
    match qid.sort() {
        None => print_identifier(w, qid.identifier()),
        Some(sort) => {
            write!(w, "(as ")?;
            print_identifier(w, qid.identifier())?;
            write!(w, " ")?;
            print_sort(w, sort)?;
            write!(w, ")")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_string(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn simple_identifier_prints_bare() {
        let id = Identifier::simple("Int");
        assert_eq!(to_string(|w| print_identifier(w, &id)), "Int");
    }

    #[test]
    fn indexed_identifier_prints_underscore_form() {
        use smtlib_ast::literal::Numeral;
        let id = Identifier::indexed("extract", Numeral::from_u64(3), vec![Numeral::from_u64(0)]);
        assert_eq!(to_string(|w| print_identifier(w, &id)), "(_ extract 3 0)");
    }

    #[test]
    fn leaf_sort_prints_identifier_only() {
        let sort = Sort::leaf(Identifier::simple("Bool"));
        assert_eq!(to_string(|w| print_sort(w, &sort)), "Bool");
    }

    #[test]
    fn parameterized_sort_prints_parenthesized() {
        let sort = Sort::parameterized(
            Identifier::simple("Array"),
            vec![Sort::leaf(Identifier::simple("Int")), Sort::leaf(Identifier::simple("Bool"))],
        );
        assert_eq!(to_string(|w| print_sort(w, &sort)), "(Array Int Bool)");
    }

    #[test]
    fn annotated_qualified_identifier_prints_as_form() {
        let qid = QualifiedIdentifier::annotated(
            Identifier::simple("empty"),
            Sort::leaf(Identifier::simple("Set")),
        );
        assert_eq!(to_string(|w| print_qualified_identifier(w, &qid)), "(as empty Set)");
    }
}
