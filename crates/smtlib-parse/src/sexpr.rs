//! Parsing of bare S-expressions: the generic substrate used for attribute
//! values, non-standard commands, and most response payloads.
//!
//! This production only ever builds the `Literal`/`Symbol`/`Keyword`/`List`
//! variants of [`SExpr`] — the `Command`/`Term` wrapper variants exist for
//! embedding an already-built node, not for anything the raw s-expression
//! grammar produces on its own.

use smtlib_ast::literal::{Binary, Decimal, Hexadecimal, Literal, Numeral};
use smtlib_ast::sexpr::SExpr;
use smtlib_ast::symbol::Keyword;
use smtlib_lex::Token;

use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_sexpr(&mut self) -> Result<SExpr> {
        match self.current().clone() {
            Token::OParen => {
                self.advance()?;
                let mut items = Vec::new();
                while self.current() != &Token::CParen {
                    items.push(self.parse_sexpr()?);
                }
                self.expect_cparen()?;
                Ok(SExpr::list(items))
            }
            Token::Keyword(name) => {
                self.advance()?;
                Ok(SExpr::Keyword(Keyword::new(name)))
            }
            Token::SymbolLit(name) => {
                self.advance()?;
                Ok(SExpr::symbol(name))
            }
            Token::NumeralLit(_) | Token::DecimalLit { .. } | Token::StringLit(_)
            | Token::BinaryLit(_) | Token::HexadecimalLit(_) => {
                Ok(SExpr::Literal(self.parse_literal_token()?))
            }
            other => match reserved_token_text(&other) {
                Some(name) => {
                    self.advance()?;
                    Ok(SExpr::symbol(name))
                }
                None => Err(self.error_for("an s-expression", &other)),
            },
        }
    }

    /// Consumes the current literal token and builds the matching
    /// [`Literal`]. Panics if called on a non-literal token; callers only
    /// reach this after matching one.
    pub(crate) fn parse_literal_token(&mut self) -> Result<Literal> {
        let literal = match self.current().clone() {
            Token::NumeralLit(digits) => Literal::Numeral(Numeral::from_digits(&digits)),
            Token::DecimalLit { int_part, frac_part } => {
                Literal::Decimal(Decimal::new(int_part, frac_part))
            }
            Token::StringLit(s) => Literal::Str(s),
            Token::BinaryLit(bits) => Literal::Binary(Binary::new(bits)),
            Token::HexadecimalLit(digits) => Literal::Hexadecimal(Hexadecimal::new(digits)),
            other => return Err(self.error_for("a literal", &other)),
        };
        self.advance()?;
        Ok(literal)
    }
}

/// The textual spelling of a reserved-word token, for contexts (bare
/// s-expressions, non-standard commands) where reserved words are
/// syntactically interchangeable with ordinary symbols.
pub(crate) fn reserved_token_text(token: &Token) -> Option<&'static str> {
    Some(match token {
        Token::Assert => "assert",
        Token::CheckSat => "check-sat",
        Token::DeclareSort => "declare-sort",
        Token::DeclareFun => "declare-fun",
        Token::DefineSort => "define-sort",
        Token::DefineFun => "define-fun",
        Token::Exit => "exit",
        Token::GetAssertions => "get-assertions",
        Token::GetAssignment => "get-assignment",
        Token::GetInfo => "get-info",
        Token::GetOption => "get-option",
        Token::GetProof => "get-proof",
        Token::GetUnsatCore => "get-unsat-core",
        Token::GetValue => "get-value",
        Token::GetModel => "get-model",
        Token::Pop => "pop",
        Token::Push => "push",
        Token::SetLogic => "set-logic",
        Token::SetInfo => "set-info",
        Token::SetOption => "set-option",
        Token::DeclareDatatypes => "declare-datatypes",
        Token::Par => "par",
        Token::NumeralKw => "NUMERAL",
        Token::DecimalKw => "DECIMAL",
        Token::StringKw => "STRING",
        Token::Underscore => "_",
        Token::Bang => "!",
        Token::As => "as",
        Token::Let => "let",
        Token::ForAll => "forall",
        Token::Exists => "exists",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_nested_list() {
        let mut p = Parser::new("(a (b 1) :kw)").unwrap();
        let sexpr = p.parse_sexpr().unwrap();
        match sexpr {
            SExpr::List(items) => assert_eq!(items.len(), 3),
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn reserved_word_reads_as_symbol() {
        let mut p = Parser::new("(let 1)").unwrap();
        let sexpr = p.parse_sexpr().unwrap();
        match sexpr {
            SExpr::List(items) => match &items[0] {
                SExpr::Symbol(s) => assert_eq!(s.as_str(), "let"),
                _ => panic!("expected symbol"),
            },
            _ => panic!("expected list"),
        }
    }
}
