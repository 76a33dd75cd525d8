//! Response parsing: one entry point per response kind, since a solver's
//! reply is read with full knowledge of which command produced it — there
//! is no single ambient "parse a response" grammar to dispatch from.

use smtlib_ast::response::{CheckSatResult, InfoResponseItem, Response};
use smtlib_ast::term::Term;
use smtlib_lex::Token;

use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// The generic acknowledgement shared by every command that doesn't
    /// define its own response shape: `success`, `unsupported`, or
    /// `(error "message")`.
    pub fn parse_gen_response(&mut self) -> Result<Response> {
        match self.current().clone() {
            Token::SymbolLit(s) if s == "success" => {
                self.advance()?;
                Ok(Response::Success)
            }
            Token::SymbolLit(s) if s == "unsupported" => {
                self.advance()?;
                Ok(Response::Unsupported)
            }
            Token::OParen => {
                self.advance()?;
                let tag = self.expect_symbol()?;
                if tag.as_str() != "error" {
                    return Err(self.error("'error'"));
                }
                let message = self.expect_string()?;
                self.expect_cparen()?;
                Ok(Response::Error(message))
            }
            other => Err(self.error_for("success, unsupported, or an error response", &other)),
        }
    }

    pub fn parse_check_sat_response(&mut self) -> Result<Response> {
        let symbol = self.expect_symbol()?;
        let result = match symbol.as_str() {
            "sat" => CheckSatResult::Sat,
            "unsat" => CheckSatResult::Unsat,
            "unknown" => CheckSatResult::Unknown,
            _ => return Err(self.error("'sat', 'unsat', or 'unknown'")),
        };
        Ok(Response::CheckSatResponse(result))
    }

    pub fn parse_get_assertions_response(&mut self) -> Result<Response> {
        self.expect_oparen()?;
        let mut terms = Vec::new();
        while self.current() != &Token::CParen {
            terms.push(self.parse_term()?);
        }
        self.expect_cparen()?;
        Ok(Response::GetAssertionsResponse(terms))
    }

    pub fn parse_get_assignment_response(&mut self) -> Result<Response> {
        self.expect_oparen()?;
        let mut pairs = Vec::new();
        while self.current() != &Token::CParen {
            self.expect_oparen()?;
            let symbol = self.expect_symbol()?;
            let value = self.parse_bool_value()?;
            self.expect_cparen()?;
            pairs.push((symbol, value));
        }
        self.expect_cparen()?;
        Ok(Response::GetAssignmentResponse(pairs))
    }

    fn parse_bool_value(&mut self) -> Result<bool> {
        let symbol = self.expect_symbol()?;
        match symbol.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(self.error("'true' or 'false'")),
        }
    }

    pub fn parse_get_value_response(&mut self) -> Result<Response> {
        self.expect_oparen()?;
        let head = self.parse_value_pair()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_value_pair()?);
        }
        self.expect_cparen()?;
        Ok(Response::get_value(head, tail))
    }

    fn parse_value_pair(&mut self) -> Result<(Term, Term)> {
        self.expect_oparen()?;
        let key = self.parse_term()?;
        let value = self.parse_term()?;
        self.expect_cparen()?;
        Ok((key, value))
    }

    pub fn parse_get_proof_response(&mut self) -> Result<Response> {
        Ok(Response::GetProofResponse(self.parse_sexpr()?))
    }

    pub fn parse_get_unsat_core_response(&mut self) -> Result<Response> {
        self.expect_oparen()?;
        let mut names = Vec::new();
        while self.current() != &Token::CParen {
            names.push(self.expect_symbol()?);
        }
        self.expect_cparen()?;
        Ok(Response::GetUnsatCoreResponse(names))
    }

    pub fn parse_get_option_response(&mut self) -> Result<Response> {
        Ok(Response::GetOptionResponse(self.parse_sexpr()?))
    }

    pub fn parse_get_info_response(&mut self) -> Result<Response> {
        self.expect_oparen()?;
        let head = self.parse_info_response_item()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_info_response_item()?);
        }
        self.expect_cparen()?;
        Ok(Response::get_info(head, tail))
    }

    fn parse_info_response_item(&mut self) -> Result<InfoResponseItem> {
        self.expect_oparen()?;
        let keyword = self.expect_keyword()?;
        let value = self.parse_sexpr()?;
        self.expect_cparen()?;
        Ok(InfoResponseItem::new(keyword, value))
    }

    pub fn parse_get_model_response(&mut self) -> Result<Response> {
        self.expect_oparen()?;
        let head = self.expect_symbol()?;
        if head.as_str() != "model" {
            return Err(self.error("the 'model' keyword"));
        }
        let mut items = Vec::new();
        while self.current() != &Token::CParen {
            items.push(self.parse_sexpr()?);
        }
        self.expect_cparen()?;
        Ok(Response::GetModelResponse(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_sat_response_variants() {
        for (text, expected) in [
            ("sat", CheckSatResult::Sat),
            ("unsat", CheckSatResult::Unsat),
            ("unknown", CheckSatResult::Unknown),
        ] {
            let mut p = Parser::new(text).unwrap();
            match p.parse_check_sat_response().unwrap() {
                Response::CheckSatResponse(result) => assert_eq!(result, expected),
                other => panic!("expected check-sat response, got {other:?}"),
            }
        }
    }

    #[test]
    fn gen_response_error_carries_message() {
        let mut p = Parser::new("(error \"unexpected token\")").unwrap();
        match p.parse_gen_response().unwrap() {
            Response::Error(msg) => assert_eq!(msg, "unexpected token"),
            other => panic!("expected error response, got {other:?}"),
        }
    }

    #[test]
    fn get_value_response_reads_pairs() {
        let mut p = Parser::new("((a 1) (b 2))").unwrap();
        match p.parse_get_value_response().unwrap() {
            Response::GetValueResponse(pairs) => assert_eq!(pairs.len(), 2),
            other => panic!("expected get-value response, got {other:?}"),
        }
    }

    #[test]
    fn get_unsat_core_response_reads_names() {
        let mut p = Parser::new("(a3 a5)").unwrap();
        match p.parse_get_unsat_core_response().unwrap() {
            Response::GetUnsatCoreResponse(names) => assert_eq!(names.len(), 2),
            other => panic!("expected get-unsat-core response, got {other:?}"),
        }
    }

    #[test]
    fn get_model_response_requires_the_model_head_symbol() {
        let mut p = Parser::new("((define-fun f () Int 5))").unwrap();
        assert!(p.parse_get_model_response().is_err());
    }

    #[test]
    fn get_model_response_reads_items_after_the_model_head() {
        let mut p = Parser::new("(model (define-fun f () Int 5))").unwrap();
        match p.parse_get_model_response().unwrap() {
            Response::GetModelResponse(items) => assert_eq!(items.len(), 1),
            other => panic!("expected get-model response, got {other:?}"),
        }
    }
}
