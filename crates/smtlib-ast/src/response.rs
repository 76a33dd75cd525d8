//! Solver responses: what a conforming solver writes back for each command.

use crate::nonempty::NonEmptyVec;
use crate::sexpr::SExpr;
use crate::symbol::{Keyword, Symbol};
use crate::term::Term;

/// The result of `check-sat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckSatResult {
    Sat,
    Unsat,
    Unknown,
}

/// One item of a `get-info` response: a keyword and its S-expression value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InfoResponseItem {
    pub keyword: Keyword,
    pub value: SExpr,
}

impl InfoResponseItem {
    pub fn new(keyword: impl Into<Keyword>, value: SExpr) -> Self {
        Self {
            keyword: keyword.into(),
            value,
        }
    }
}

/// The closed response algebra, one variant per command that produces a
/// non-trivial answer, plus the two generic acknowledgements.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Response {
    Success,
    Unsupported,
    Error(String),
    CheckSatResponse(CheckSatResult),
    GetAssertionsResponse(Vec<Term>),
    GetAssignmentResponse(Vec<(Symbol, bool)>),
    GetValueResponse(NonEmptyVec<(Term, Term)>),
    GetProofResponse(SExpr),
    GetUnsatCoreResponse(Vec<Symbol>),
    GetOptionResponse(SExpr),
    GetInfoResponse(NonEmptyVec<InfoResponseItem>),
    GetModelResponse(Vec<SExpr>),
}

impl Response {
    pub fn get_value(head: (Term, Term), tail: Vec<(Term, Term)>) -> Self {
        Response::GetValueResponse(NonEmptyVec::new(head, tail))
    }

    pub fn get_info(head: InfoResponseItem, tail: Vec<InfoResponseItem>) -> Self {
        Response::GetInfoResponse(NonEmptyVec::new(head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Identifier;
    use crate::literal::{Literal, Numeral};
    use crate::qualified_identifier::QualifiedIdentifier;

    fn num_term(n: u64) -> Term {
        Term::literal(Literal::Numeral(Numeral::from_u64(n)))
    }

    fn sym_term(name: &str) -> Term {
        Term::identifier(QualifiedIdentifier::plain(Identifier::simple(name)))
    }

    #[test]
    fn get_value_response_pairs_survive() {
        let resp = Response::get_value((sym_term("a"), num_term(42)), vec![(sym_term("b"), num_term(12))]);
        match resp {
            Response::GetValueResponse(pairs) => assert_eq!(pairs.len(), 2),
            _ => panic!("expected get-value response"),
        }
    }
}
