//! Character classes used by the dispatch loop.

/// ASCII letters, digits, and `+ - * / @ $ % ^ & _ ! ? [ ] { } = < > ~ .`.
/// A simple symbol is a maximal run of these that doesn't start with a
/// digit.
pub fn is_simple_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '+' | '-'
                | '*'
                | '/'
                | '@'
                | '$'
                | '%'
                | '^'
                | '&'
                | '_'
                | '!'
                | '?'
                | '['
                | ']'
                | '{'
                | '}'
                | '='
                | '<'
                | '>'
                | '~'
                | '.'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_subset_is_simple() {
        for c in "+-*/@$%^&_!?[]{}=<>~.".chars() {
            assert!(is_simple_symbol_char(c), "{c} should be simple");
        }
    }

    #[test]
    fn whitespace_and_parens_are_not_simple() {
        for c in [' ', '\n', '(', ')', '"', '|', ':', ';'] {
            assert!(!is_simple_symbol_char(c));
        }
    }
}
