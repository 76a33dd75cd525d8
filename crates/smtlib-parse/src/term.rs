//! Term parsing.
//!
//! ```text
//! term ::= spec_constant
//!        | qual_identifier
//!        | ( qual_identifier term+ )
//!        | ( let ( var_binding+ ) term )
//!        | ( forall ( sorted_var+ ) term )
//!        | ( exists ( sorted_var+ ) term )
//!        | ( ! term attribute+ )
//! ```
//!
//! A term's qualified identifier can itself be parenthesized
//! (`(as f S)`, `(_ f k)`), so applying it to arguments doubles the
//! parens: `((as f S) x)`. The dispatch below tells the two apart by what
//! immediately follows the term's own opening paren, without needing more
//! than the usual one token of lookahead.

use smtlib_ast::identifier::Identifier;
use smtlib_ast::qualified_identifier::QualifiedIdentifier;
use smtlib_ast::term::{Attribute, SortedVar, Term, VarBinding};
use smtlib_lex::Token;

use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_term(&mut self) -> Result<Term> {
        match self.current().clone() {
            Token::NumeralLit(_)
            | Token::DecimalLit { .. }
            | Token::StringLit(_)
            | Token::BinaryLit(_)
            | Token::HexadecimalLit(_) => Ok(Term::literal(self.parse_literal_token()?)),
            Token::SymbolLit(name) => {
                self.advance()?;
                Ok(Term::identifier(QualifiedIdentifier::plain(
                    Identifier::simple(name),
                )))
            }
            Token::OParen => {
                self.advance()?;
                match self.current().clone() {
                    Token::Let => self.parse_let_term(),
                    Token::ForAll => self.parse_quantifier_term(true),
                    Token::Exists => self.parse_quantifier_term(false),
                    Token::Bang => self.parse_annotated_term(),
                    Token::As => {
                        self.advance()?;
                        let id = self.parse_identifier()?;
                        let sort = self.parse_sort()?;
                        self.expect_cparen()?;
                        Ok(Term::identifier(QualifiedIdentifier::annotated(id, sort)))
                    }
                    Token::Underscore => {
                        self.advance()?;
                        let id = self.parse_indexed_identifier_tail()?;
                        Ok(Term::identifier(QualifiedIdentifier::plain(id)))
                    }
                    Token::SymbolLit(name) => {
                        self.advance()?;
                        let function =
                            QualifiedIdentifier::plain(Identifier::simple(name));
                        self.parse_application_args(function)
                    }
                    Token::OParen => {
                        let function = self.parse_qualified_identifier()?;
                        self.parse_application_args(function)
                    }
                    other => Err(self.error_for("a term", &other)),
                }
            }
            other => Err(self.error_for("a term", &other)),
        }
    }

    /// Parses `term+ )`, with `function` already read.
    fn parse_application_args(&mut self, function: QualifiedIdentifier) -> Result<Term> {
        let head = self.parse_term()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_term()?);
        }
        self.expect_cparen()?;
        Ok(Term::apply(function, head, tail))
    }

    /// Parses `let ( var_binding+ ) term )`, with `(` already consumed and
    /// `let` still current.
    fn parse_let_term(&mut self) -> Result<Term> {
        self.advance()?;
        self.expect_oparen()?;
        let head = self.parse_var_binding()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_var_binding()?);
        }
        self.expect_cparen()?;
        let body = self.parse_term()?;
        self.expect_cparen()?;
        Ok(Term::let_binding(head, tail, body))
    }

    fn parse_var_binding(&mut self) -> Result<VarBinding> {
        self.expect_oparen()?;
        let symbol = self.expect_symbol()?;
        let term = self.parse_term()?;
        self.expect_cparen()?;
        Ok(VarBinding::new(symbol, term))
    }

    /// Parses `(forall|exists) ( sorted_var+ ) term )`, with `(` already
    /// consumed and the binder keyword still current.
    fn parse_quantifier_term(&mut self, is_forall: bool) -> Result<Term> {
        self.advance()?;
        self.expect_oparen()?;
        let head = self.parse_sorted_var()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_sorted_var()?);
        }
        self.expect_cparen()?;
        let body = self.parse_term()?;
        self.expect_cparen()?;
        if is_forall {
            Ok(Term::forall(head, tail, body))
        } else {
            Ok(Term::exists(head, tail, body))
        }
    }

    fn parse_sorted_var(&mut self) -> Result<SortedVar> {
        self.expect_oparen()?;
        let symbol = self.expect_symbol()?;
        let sort = self.parse_sort()?;
        self.expect_cparen()?;
        Ok(SortedVar::new(symbol, sort))
    }

    /// Parses `! term attribute+ )`, with `(` already consumed and `!`
    /// still current.
    fn parse_annotated_term(&mut self) -> Result<Term> {
        self.advance()?;
        let term = self.parse_term()?;
        let head = self.parse_attribute()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_attribute()?);
        }
        self.expect_cparen()?;
        Ok(Term::annotated(term, head, tail))
    }

    pub(crate) fn parse_attribute(&mut self) -> Result<Attribute> {
        let keyword = self.expect_keyword()?;
        let value = match self.current() {
            Token::CParen | Token::Keyword(_) => None,
            _ => Some(self.parse_sexpr()?),
        };
        Ok(Attribute::new(keyword, value))
    }
}
