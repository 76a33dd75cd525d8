//! Printing for constant literals.

use std::io::{self, Write};

use smtlib_ast::literal::Literal;

use crate::canonical::format_string_literal;

pub fn print_literal<W: Write>(w: &mut W, literal: &Literal) -> io::Result<()> {
    match literal {
        Literal::Numeral(n) => write!(w, "{}", n.to_canonical_string()),
        Literal::Decimal(d) => write!(w, "{}", d.to_canonical_string()),
        Literal::Hexadecimal(h) => write!(w, "{}", h.to_canonical_string()),
        Literal::Binary(b) => write!(w, "{}", b.to_canonical_string()),
        Literal::Str(s) => write!(w, "{}", format_string_literal(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smtlib_ast::literal::{Binary, Decimal, Hexadecimal, Numeral};

    fn to_string(lit: &Literal) -> String {
        let mut buf = Vec::new();
        print_literal(&mut buf, lit).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn numeral_has_no_leading_zeros() {
        assert_eq!(to_string(&Literal::Numeral(Numeral::from_digits("007"))), "7");
    }

    #[test]
    fn decimal_keeps_both_parts() {
        assert_eq!(to_string(&Literal::Decimal(Decimal::new("1", "5"))), "1.5");
    }

    #[test]
    fn hexadecimal_prints_uppercase_with_prefix() {
        assert_eq!(to_string(&Literal::Hexadecimal(Hexadecimal::new("ff"))), "#xFF");
    }

    #[test]
    fn binary_prints_msb_first_with_prefix() {
        assert_eq!(to_string(&Literal::Binary(Binary::new(vec![true, false]))), "#b10");
    }

    #[test]
    fn string_escapes_quotes_and_backslashes() {
        assert_eq!(to_string(&Literal::Str("a\"b".to_string())), "\"a\\\"b\"");
    }
}
