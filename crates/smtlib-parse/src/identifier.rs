//! Parsing for identifiers and sorts.
//!
//! `identifier ::= symbol | ( _ symbol index+ )`
//! `sort ::= identifier | ( identifier sort+ )`
//!
//! Both productions can start with `(`, and an indexed identifier's own
//! parens can stand for the whole sort (`(_ BitVec 32)`), so the dispatch
//! here always consumes the opening paren itself before deciding what
//! follows it.

use smtlib_ast::identifier::Identifier;
use smtlib_ast::sort::Sort;
use smtlib_lex::Token;

use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_identifier(&mut self) -> Result<Identifier> {
        if self.current() == &Token::OParen {
            self.advance()?;
            self.expect(&Token::Underscore, "'_'")?;
            self.parse_indexed_identifier_tail()
        } else {
            Ok(Identifier::simple(self.expect_symbol()?))
        }
    }

    /// Parses `symbol index+ )`, assuming `(` and `_` have already been
    /// consumed.
    pub(crate) fn parse_indexed_identifier_tail(&mut self) -> Result<Identifier> {
        let symbol = self.expect_symbol()?;
        let head = self.expect_numeral()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.expect_numeral()?);
        }
        self.expect_cparen()?;
        Ok(Identifier::indexed(symbol, head, tail))
    }

    pub fn parse_sort(&mut self) -> Result<Sort> {
        if self.current() == &Token::OParen {
            self.advance()?;
            if self.current() == &Token::Underscore {
                self.advance()?;
                let id = self.parse_indexed_identifier_tail()?;
                Ok(Sort::leaf(id))
            } else {
                let id = if self.current() == &Token::OParen {
                    self.parse_identifier()?
                } else {
                    Identifier::simple(self.expect_symbol()?)
                };
                let mut subsorts = vec![self.parse_sort()?];
                while self.current() != &Token::CParen {
                    subsorts.push(self.parse_sort()?);
                }
                self.expect_cparen()?;
                Ok(Sort::parameterized(id, subsorts))
            }
        } else {
            Ok(Sort::leaf(Identifier::simple(self.expect_symbol()?)))
        }
    }
}
