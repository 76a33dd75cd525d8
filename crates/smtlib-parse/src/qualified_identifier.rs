//! `qual_identifier ::= identifier | ( as identifier sort )`

use smtlib_ast::identifier::Identifier;
use smtlib_ast::qualified_identifier::QualifiedIdentifier;
use smtlib_lex::Token;

use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_qualified_identifier(&mut self) -> Result<QualifiedIdentifier> {
        if self.current() == &Token::OParen {
            self.advance()?;
            if self.current() == &Token::As {
                self.advance()?;
                let id = self.parse_identifier()?;
                let sort = self.parse_sort()?;
                self.expect_cparen()?;
                Ok(QualifiedIdentifier::annotated(id, sort))
            } else {
                self.expect(&Token::Underscore, "'_' or 'as'")?;
                let id = self.parse_indexed_identifier_tail()?;
                Ok(QualifiedIdentifier::plain(id))
            }
        } else {
            Ok(QualifiedIdentifier::plain(Identifier::simple(
                self.expect_symbol()?,
            )))
        }
    }
}
