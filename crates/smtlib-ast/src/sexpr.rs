//! S-expressions: the polymorphic substrate every AST family can embed into.

use crate::command::Command;
use crate::literal::Literal;
use crate::symbol::{Keyword, Symbol};
use crate::term::Term;

/// One of {constant literal, symbol, keyword, list of S-expressions}, or a
/// wrapped command/term for the non-standard constructs that embed them
/// (model responses, option and info payloads).
///
/// Wrapping rather than re-deriving text is what keeps the contract that
/// printing `SExpr::Term(t)` yields exactly what printing `t` yields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SExpr {
    Literal(Literal),
    Symbol(Symbol),
    Keyword(Keyword),
    List(Vec<SExpr>),
    Command(Box<Command>),
    Term(Box<Term>),
}

impl SExpr {
    pub fn symbol(name: impl Into<Symbol>) -> Self {
        SExpr::Symbol(name.into())
    }

    pub fn list(items: Vec<SExpr>) -> Self {
        SExpr::List(items)
    }

    pub fn command(command: Command) -> Self {
        SExpr::Command(Box::new(command))
    }

    pub fn term(term: Term) -> Self {
        SExpr::Term(Box::new(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_holds_heterogeneous_items() {
        let sexpr = SExpr::list(vec![SExpr::symbol("a"), SExpr::Literal(Literal::Str("b".into()))]);
        match sexpr {
            SExpr::List(items) => assert_eq!(items.len(), 2),
            _ => panic!("expected list"),
        }
    }
}
