//! Terms: the expression language of SMT-LIB.

use crate::literal::Literal;
use crate::nonempty::NonEmptyVec;
use crate::qualified_identifier::QualifiedIdentifier;
use crate::sexpr::SExpr;
use crate::sort::Sort;
use crate::symbol::{Keyword, Symbol};

/// A `let`-binding: a bound symbol and the term it is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarBinding {
    pub symbol: Symbol,
    pub term: Box<Term>,
}

impl VarBinding {
    pub fn new(symbol: impl Into<Symbol>, term: Term) -> Self {
        Self {
            symbol: symbol.into(),
            term: Box::new(term),
        }
    }
}

/// A `forall`/`exists`-bound variable: a symbol and its sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortedVar {
    pub symbol: Symbol,
    pub sort: Sort,
}

impl SortedVar {
    pub fn new(symbol: impl Into<Symbol>, sort: Sort) -> Self {
        Self {
            symbol: symbol.into(),
            sort,
        }
    }
}

/// A keyword plus an optional S-expression value, used both as `!`-term
/// annotations and as `set-option`/`get-info` payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub keyword: Keyword,
    pub value: Option<SExpr>,
}

impl Attribute {
    pub fn new(keyword: impl Into<Keyword>, value: Option<SExpr>) -> Self {
        Self {
            keyword: keyword.into(),
            value,
        }
    }
}

/// The closed term algebra. Every "at least one" position (function
/// arguments, binder lists, attribute lists) is a [`NonEmptyVec`] so an
/// empty one cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Literal(Literal),
    Identifier(QualifiedIdentifier),
    FunctionApplication {
        function: QualifiedIdentifier,
        args: NonEmptyVec<Term>,
    },
    Let {
        bindings: NonEmptyVec<VarBinding>,
        body: Box<Term>,
    },
    ForAll {
        vars: NonEmptyVec<SortedVar>,
        body: Box<Term>,
    },
    Exists {
        vars: NonEmptyVec<SortedVar>,
        body: Box<Term>,
    },
    Annotated {
        term: Box<Term>,
        attrs: NonEmptyVec<Attribute>,
    },
}

impl Term {
    pub fn literal(lit: Literal) -> Self {
        Term::Literal(lit)
    }

    pub fn identifier(id: QualifiedIdentifier) -> Self {
        Term::Identifier(id)
    }

    /// `args` must be non-empty — a zero-argument application is
    /// indistinguishable from a bare identifier and the grammar forbids it.
    pub fn apply(function: QualifiedIdentifier, head: Term, tail: Vec<Term>) -> Self {
        Term::FunctionApplication {
            function,
            args: NonEmptyVec::new(head, tail),
        }
    }

    pub fn let_binding(head: VarBinding, tail: Vec<VarBinding>, body: Term) -> Self {
        Term::Let {
            bindings: NonEmptyVec::new(head, tail),
            body: Box::new(body),
        }
    }

    pub fn forall(head: SortedVar, tail: Vec<SortedVar>, body: Term) -> Self {
        Term::ForAll {
            vars: NonEmptyVec::new(head, tail),
            body: Box::new(body),
        }
    }

    pub fn exists(head: SortedVar, tail: Vec<SortedVar>, body: Term) -> Self {
        Term::Exists {
            vars: NonEmptyVec::new(head, tail),
            body: Box::new(body),
        }
    }

    pub fn annotated(term: Term, head: Attribute, tail: Vec<Attribute>) -> Self {
        Term::Annotated {
            term: Box::new(term),
            attrs: NonEmptyVec::new(head, tail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Identifier;

    #[test]
    fn apply_requires_at_least_one_arg() {
        let f = QualifiedIdentifier::plain(Identifier::simple("f"));
        let a = Term::identifier(QualifiedIdentifier::plain(Identifier::simple("a")));
        let t = Term::apply(f, a, vec![]);
        match t {
            Term::FunctionApplication { args, .. } => assert_eq!(args.len(), 1),
            _ => panic!("expected function application"),
        }
    }

    #[test]
    fn let_binding_nests_body() {
        let binding = VarBinding::new(
            "x",
            Term::identifier(QualifiedIdentifier::plain(Identifier::simple("0"))),
        );
        let body = Term::identifier(QualifiedIdentifier::plain(Identifier::simple("x")));
        let t = Term::let_binding(binding, vec![], body);
        assert!(matches!(t, Term::Let { .. }));
    }
}
