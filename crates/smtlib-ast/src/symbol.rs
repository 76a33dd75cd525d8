//! Symbols and keywords: the two name-shaped literal kinds.

/// Returns whether `c` belongs to the simple-symbol alphabet: ASCII
/// letters, digits, and `+ - * / @ $ % ^ & _ ! ? [ ] { } = < > ~ .`.
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

/// Whether `name` can print bare (unquoted): every character is in the
/// simple-symbol alphabet and the first is not a digit.
pub fn is_bare_printable(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => false,
        Some(c) if !is_simple_symbol_char(c) => false,
        Some(_) => chars.all(is_simple_symbol_char),
        None => false,
    }
}

/// A non-empty symbol name. Its lexical form (bare or `|quoted|`) is
/// recovered at print time from the characters it contains, not stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "symbols are non-empty names");
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Symbol::new(s)
    }
}

/// A name that prints as `:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "keywords are non-empty names");
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Keyword {
    fn from(s: &str) -> Self {
        Keyword::new(s)
    }
}

impl From<String> for Keyword {
    fn from(s: String) -> Self {
        Keyword::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_alphabet_prints_bare() {
        assert!(is_bare_printable("declare-fun"));
        assert!(is_bare_printable("x"));
        assert!(is_bare_printable("<=.~"));
    }

    #[test]
    fn leading_digit_forces_quoting() {
        assert!(!is_bare_printable("1x"));
    }

    #[test]
    fn non_alphabet_char_forces_quoting() {
        assert!(!is_bare_printable("a b"));
        assert!(!is_bare_printable("x|y"));
    }

    #[test]
    fn empty_name_is_not_bare() {
        assert!(!is_bare_printable(""));
    }
}
