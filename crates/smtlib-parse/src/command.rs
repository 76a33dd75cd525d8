//! Command and script parsing.

use smtlib_ast::command::{Command, ConstructorDecl, DatatypeDecl, InfoFlag, SMTOption};
use smtlib_ast::script::Script;
use smtlib_ast::sexpr::SExpr;
use smtlib_lex::Token;

use crate::error::Result;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub fn parse_script(&mut self) -> Result<Script> {
        let mut commands = Vec::new();
        while !self.is_at_end() {
            commands.push(self.parse_command()?);
        }
        Ok(Script::new(commands))
    }

    pub fn parse_command(&mut self) -> Result<Command> {
        self.expect_oparen()?;
        let command = match self.current().clone() {
            Token::SetLogic => {
                self.advance()?;
                Command::SetLogic(self.expect_symbol()?)
            }
            Token::SetOption => {
                self.advance()?;
                Command::SetOption(self.parse_smt_option()?)
            }
            Token::SetInfo => {
                self.advance()?;
                Command::SetInfo(self.parse_attribute()?)
            }
            Token::DeclareSort => {
                self.advance()?;
                let name = self.expect_symbol()?;
                let arity = self.expect_numeral()?;
                Command::DeclareSort(name, arity)
            }
            Token::DefineSort => {
                self.advance()?;
                let name = self.expect_symbol()?;
                self.expect_oparen()?;
                let mut params = Vec::new();
                while self.current() != &Token::CParen {
                    params.push(self.expect_symbol()?);
                }
                self.expect_cparen()?;
                let sort = self.parse_sort()?;
                Command::DefineSort(name, params, sort)
            }
            Token::DeclareFun => {
                self.advance()?;
                let name = self.expect_symbol()?;
                self.expect_oparen()?;
                let mut params = Vec::new();
                while self.current() != &Token::CParen {
                    params.push(self.parse_sort()?);
                }
                self.expect_cparen()?;
                let ret = self.parse_sort()?;
                Command::DeclareFun(name, params, ret)
            }
            Token::DefineFun => {
                self.advance()?;
                let name = self.expect_symbol()?;
                self.expect_oparen()?;
                let mut params = Vec::new();
                while self.current() != &Token::CParen {
                    self.expect_oparen()?;
                    let param_name = self.expect_symbol()?;
                    let param_sort = self.parse_sort()?;
                    self.expect_cparen()?;
                    params.push((param_name, param_sort));
                }
                self.expect_cparen()?;
                let ret = self.parse_sort()?;
                let body = self.parse_term()?;
                Command::DefineFun(name, params, ret, body)
            }
            Token::Push => {
                self.advance()?;
                Command::Push(self.expect_numeral()?)
            }
            Token::Pop => {
                self.advance()?;
                Command::Pop(self.expect_numeral()?)
            }
            Token::Assert => {
                self.advance()?;
                Command::Assert(self.parse_term()?)
            }
            Token::CheckSat => {
                self.advance()?;
                Command::CheckSat
            }
            Token::GetAssertions => {
                self.advance()?;
                Command::GetAssertions
            }
            Token::GetProof => {
                self.advance()?;
                Command::GetProof
            }
            Token::GetUnsatCore => {
                self.advance()?;
                Command::GetUnsatCore
            }
            Token::GetValue => {
                self.advance()?;
                self.expect_oparen()?;
                let head = self.parse_term()?;
                let mut tail = Vec::new();
                while self.current() != &Token::CParen {
                    tail.push(self.parse_term()?);
                }
                self.expect_cparen()?;
                Command::get_value(head, tail)
            }
            Token::GetAssignment => {
                self.advance()?;
                Command::GetAssignment
            }
            Token::GetOption => {
                self.advance()?;
                Command::GetOption(self.expect_keyword()?)
            }
            Token::GetInfo => {
                self.advance()?;
                Command::GetInfo(self.parse_info_flag()?)
            }
            Token::Exit => {
                self.advance()?;
                Command::Exit
            }
            Token::GetModel => {
                self.advance()?;
                Command::GetModel
            }
            Token::DeclareDatatypes => {
                self.advance()?;
                // The standard form is `(declare-datatypes (sort-decl*) (datatype-decl+))`;
                // the leading sort-declaration list only carries arity for
                // parametric datatypes, which this AST doesn't model, so only
                // the empty form `()` is accepted here.
                self.expect_oparen()?;
                self.expect_cparen()?;
                self.expect_oparen()?;
                let head = self.parse_datatype_decl()?;
                let mut tail = Vec::new();
                while self.current() != &Token::CParen {
                    tail.push(self.parse_datatype_decl()?);
                }
                self.expect_cparen()?;
                Command::declare_datatypes(head, tail)
            }
            Token::SymbolLit(name) => {
                self.advance()?;
                let mut items = vec![SExpr::symbol(name)];
                while self.current() != &Token::CParen {
                    items.push(self.parse_sexpr()?);
                }
                self.expect_cparen()?;
                return Ok(Command::NonStandardCommand(SExpr::list(items)));
            }
            other => return Err(self.error_for("a command keyword", &other)),
        };
        self.expect_cparen()?;
        Ok(command)
    }

    fn parse_datatype_decl(&mut self) -> Result<DatatypeDecl> {
        self.expect_oparen()?;
        let name = self.expect_symbol()?;
        let head = self.parse_constructor_decl()?;
        let mut tail = Vec::new();
        while self.current() != &Token::CParen {
            tail.push(self.parse_constructor_decl()?);
        }
        self.expect_cparen()?;
        Ok(DatatypeDecl::new(name, head, tail))
    }

    fn parse_constructor_decl(&mut self) -> Result<ConstructorDecl> {
        self.expect_oparen()?;
        let name = self.expect_symbol()?;
        let mut fields = Vec::new();
        while self.current() != &Token::CParen {
            self.expect_oparen()?;
            let field_name = self.expect_symbol()?;
            let field_sort = self.parse_sort()?;
            self.expect_cparen()?;
            fields.push((field_name, field_sort));
        }
        self.expect_cparen()?;
        Ok(ConstructorDecl::new(name, fields))
    }

    fn parse_bool(&mut self) -> Result<bool> {
        let symbol = self.expect_symbol()?;
        match symbol.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(self.error("'true' or 'false'")),
        }
    }

    fn expect_i64(&mut self) -> Result<i64> {
        let numeral = self.expect_numeral()?;
        numeral
            .to_canonical_string()
            .parse::<i64>()
            .map_err(|_| self.error("an i64-sized numeral"))
    }

    fn parse_smt_option(&mut self) -> Result<SMTOption> {
        let keyword = self.expect_keyword()?;
        Ok(match keyword.as_str() {
            "print-success" => SMTOption::PrintSuccess(self.parse_bool()?),
            "expand-definitions" => SMTOption::ExpandDefinitions(self.parse_bool()?),
            "interactive-mode" => SMTOption::InteractiveMode(self.parse_bool()?),
            "produce-proofs" => SMTOption::ProduceProofs(self.parse_bool()?),
            "produce-unsat-cores" => SMTOption::ProduceUnsatCores(self.parse_bool()?),
            "produce-models" => SMTOption::ProduceModels(self.parse_bool()?),
            "produce-assignments" => SMTOption::ProduceAssignments(self.parse_bool()?),
            "regular-output-channel" => SMTOption::RegularOutputChannel(self.expect_string()?),
            "diagnostic-output-channel" => {
                SMTOption::DiagnosticOutputChannel(self.expect_string()?)
            }
            "random-seed" => SMTOption::RandomSeed(self.expect_i64()?),
            "verbosity" => SMTOption::Verbosity(self.expect_i64()?),
            _ => {
                let value = match self.current() {
                    Token::CParen => None,
                    _ => Some(self.parse_sexpr()?),
                };
                SMTOption::AttributeOption(smtlib_ast::term::Attribute::new(keyword, value))
            }
        })
    }

    fn parse_info_flag(&mut self) -> Result<InfoFlag> {
        let keyword = self.expect_keyword()?;
        Ok(match keyword.as_str() {
            "error-behavior" => InfoFlag::ErrorBehavior,
            "name" => InfoFlag::Name,
            "authors" => InfoFlag::Authors,
            "version" => InfoFlag::Version,
            "status" => InfoFlag::Status,
            "reason-unknown" => InfoFlag::ReasonUnknown,
            "all-statistics" => InfoFlag::AllStatistics,
            _ => InfoFlag::Keyword(keyword),
        })
    }

    pub(crate) fn expect_string(&mut self) -> Result<String> {
        match self.current().clone() {
            Token::StringLit(s) => {
                self.advance()?;
                Ok(s)
            }
            other => Err(self.error_for("a string literal", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_declare_fun() {
        let mut p = Parser::new("(declare-fun f (Int Int) Bool)").unwrap();
        match p.parse_command().unwrap() {
            Command::DeclareFun(name, params, ret) => {
                assert_eq!(name.as_str(), "f");
                assert_eq!(params.len(), 2);
                assert_eq!(ret.identifier().symbol().as_str(), "Bool");
            }
            other => panic!("expected declare-fun, got {other:?}"),
        }
    }

    #[test]
    fn parses_assert_and_check_sat() {
        let mut p = Parser::new("(assert (= x 0))\n(check-sat)\n").unwrap();
        let script = p.parse_script().unwrap();
        assert_eq!(script.commands().len(), 2);
        assert!(matches!(script.commands()[1], Command::CheckSat));
    }

    #[test]
    fn parses_set_option_with_bool() {
        let mut p = Parser::new("(set-option :produce-models true)").unwrap();
        match p.parse_command().unwrap() {
            Command::SetOption(SMTOption::ProduceModels(true)) => {}
            other => panic!("expected produce-models true, got {other:?}"),
        }
    }

    #[test]
    fn parses_non_standard_command_verbatim() {
        let mut p = Parser::new("(reset-assertions)").unwrap();
        match p.parse_command().unwrap() {
            Command::NonStandardCommand(SExpr::List(items)) => assert_eq!(items.len(), 1),
            other => panic!("expected non-standard command, got {other:?}"),
        }
    }

    #[test]
    fn parses_declare_datatypes() {
        let mut p = Parser::new("(declare-datatypes () ((A (A1 (a1a A)))))").unwrap();
        match p.parse_command().unwrap() {
            Command::DeclareDatatypes(decls) => {
                assert_eq!(decls.len(), 1);
                assert_eq!(decls.head().constructors.len(), 1);
            }
            other => panic!("expected declare-datatypes, got {other:?}"),
        }
    }

    #[test]
    fn parses_get_info_with_known_and_keyword_flags() {
        let mut p = Parser::new("(get-info :name)\n(get-info :custom-thing)\n").unwrap();
        let script = p.parse_script().unwrap();
        match &script.commands()[0] {
            Command::GetInfo(InfoFlag::Name) => {}
            other => panic!("expected Name flag, got {other:?}"),
        }
        match &script.commands()[1] {
            Command::GetInfo(InfoFlag::Keyword(k)) => assert_eq!(k.as_str(), "custom-thing"),
            other => panic!("expected keyword flag, got {other:?}"),
        }
    }
}
