//! The core parser: token buffer, lookahead, and the small expect/match
//! idiom every entry point in `term`, `sort`, `command`, and `response`
//! builds on.

use smtlib_ast::literal::Numeral;
use smtlib_ast::symbol::{Keyword, Symbol};
use smtlib_lex::{Lexer, Token};
use smtlib_util::{ParseError, Position};

use crate::error::{Error, Result};

/// A hand-written recursive-descent parser over a lexer, with one token of
/// lookahead. Each public entry point (`parse_term`, `parse_sort`, ...)
/// lives in a sibling module and borrows these primitives; none of them
/// attempt error recovery — a `ParseError` leaves the parser's position
/// undefined for further use.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    current_pos: Position,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let (current, current_pos) = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            current_pos,
        })
    }

    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn current_position(&self) -> Position {
        self.current_pos
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current == Token::Eof
    }

    /// Advances past the current token, returning it.
    pub(crate) fn advance(&mut self) -> Result<Token> {
        let (next, next_pos) = self.lexer.next_token()?;
        let prev_pos = self.current_pos;
        self.current_pos = next_pos;
        let prev = std::mem::replace(&mut self.current, next);
        let _ = prev_pos;
        Ok(prev)
    }

    /// Consumes the current token if it equals `expected`; otherwise
    /// raises a `ParseError` naming `description` as the expectation.
    pub(crate) fn expect(&mut self, expected: &Token, description: &str) -> Result<()> {
        if &self.current == expected {
            self.advance()?;
            Ok(())
        } else {
            Err(self.error(description))
        }
    }

    pub(crate) fn expect_oparen(&mut self) -> Result<()> {
        self.expect(&Token::OParen, "'('")
    }

    pub(crate) fn expect_cparen(&mut self) -> Result<()> {
        self.expect(&Token::CParen, "')'")
    }

    /// Consumes a `SymbolLit` token and returns its name.
    pub(crate) fn expect_symbol(&mut self) -> Result<Symbol> {
        match self.current.clone() {
            Token::SymbolLit(name) => {
                self.advance()?;
                Ok(Symbol::new(name))
            }
            other => Err(self.error_for("a symbol", &other)),
        }
    }

    pub(crate) fn expect_keyword(&mut self) -> Result<Keyword> {
        match self.current.clone() {
            Token::Keyword(name) => {
                self.advance()?;
                Ok(Keyword::new(name))
            }
            other => Err(self.error_for("a keyword", &other)),
        }
    }

    pub(crate) fn expect_numeral(&mut self) -> Result<Numeral> {
        match self.current.clone() {
            Token::NumeralLit(digits) => {
                self.advance()?;
                Ok(Numeral::from_digits(&digits))
            }
            other => Err(self.error_for("a numeral", &other)),
        }
    }

    pub(crate) fn error(&self, expected: &str) -> Error {
        self.error_for(expected, &self.current.clone())
    }

    pub(crate) fn error_for(&self, expected: &str, found: &Token) -> Error {
        Error::Parse(ParseError::new(
            self.current_pos,
            expected,
            describe_token(found),
        ))
    }
}

/// A short human-readable description of a token, used only in error
/// messages.
pub(crate) fn describe_token(token: &Token) -> String {
    match token {
        Token::OParen => "'('".to_string(),
        Token::CParen => "')'".to_string(),
        Token::NumeralLit(d) => format!("numeral {d}"),
        Token::DecimalLit { int_part, frac_part } => format!("decimal {int_part}.{frac_part}"),
        Token::StringLit(s) => format!("string {s:?}"),
        Token::BinaryLit(_) => "a binary literal".to_string(),
        Token::HexadecimalLit(_) => "a hexadecimal literal".to_string(),
        Token::SymbolLit(s) => format!("symbol '{s}'"),
        Token::Keyword(k) => format!("keyword ':{k}'"),
        Token::Eof => "end of input".to_string(),
        other => format!("'{other:?}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_symbol_advances() {
        let mut p = Parser::new("foo bar").unwrap();
        assert_eq!(p.expect_symbol().unwrap().as_str(), "foo");
        assert_eq!(p.expect_symbol().unwrap().as_str(), "bar");
        assert!(p.is_at_end());
    }

    #[test]
    fn expect_mismatch_errors() {
        let mut p = Parser::new("(foo)").unwrap();
        let err = p.expect_cparen().unwrap_err();
        assert!(err.to_string().contains("expected ')'"));
    }
}
