//! Commands: the top-level script language, and their option/info payloads.

use crate::literal::Numeral;
use crate::nonempty::NonEmptyVec;
use crate::sexpr::SExpr;
use crate::sort::Sort;
use crate::symbol::{Keyword, Symbol};
use crate::term::{Attribute, Term};

/// Argument to `set-option`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SMTOption {
    PrintSuccess(bool),
    ExpandDefinitions(bool),
    InteractiveMode(bool),
    ProduceProofs(bool),
    ProduceUnsatCores(bool),
    ProduceModels(bool),
    ProduceAssignments(bool),
    RegularOutputChannel(String),
    DiagnosticOutputChannel(String),
    RandomSeed(i64),
    Verbosity(i64),
    AttributeOption(Attribute),
}

/// Argument to `get-info`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InfoFlag {
    ErrorBehavior,
    Name,
    Authors,
    Version,
    Status,
    ReasonUnknown,
    AllStatistics,
    Keyword(Keyword),
}

/// One constructor in a `declare-datatypes` declaration: a name and its
/// (possibly empty) ordered field list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorDecl {
    pub name: Symbol,
    pub fields: Vec<(Symbol, Sort)>,
}

impl ConstructorDecl {
    pub fn new(name: impl Into<Symbol>, fields: Vec<(Symbol, Sort)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// One datatype declaration: a name and a non-empty list of constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatatypeDecl {
    pub name: Symbol,
    pub constructors: NonEmptyVec<ConstructorDecl>,
}

impl DatatypeDecl {
    pub fn new(name: impl Into<Symbol>, head: ConstructorDecl, tail: Vec<ConstructorDecl>) -> Self {
        Self {
            name: name.into(),
            constructors: NonEmptyVec::new(head, tail),
        }
    }
}

/// One variant per SMT-LIB command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    SetLogic(Symbol),
    SetOption(SMTOption),
    SetInfo(Attribute),
    DeclareSort(Symbol, Numeral),
    DefineSort(Symbol, Vec<Symbol>, Sort),
    DeclareFun(Symbol, Vec<Sort>, Sort),
    DefineFun(Symbol, Vec<(Symbol, Sort)>, Sort, Term),
    Push(Numeral),
    Pop(Numeral),
    Assert(Term),
    CheckSat,
    GetAssertions,
    GetProof,
    GetUnsatCore,
    GetValue(NonEmptyVec<Term>),
    GetAssignment,
    GetOption(Keyword),
    GetInfo(InfoFlag),
    Exit,
    GetModel,
    DeclareDatatypes(NonEmptyVec<DatatypeDecl>),
    NonStandardCommand(SExpr),
}

impl Command {
    pub fn get_value(head: Term, tail: Vec<Term>) -> Self {
        Command::GetValue(NonEmptyVec::new(head, tail))
    }

    pub fn declare_datatypes(head: DatatypeDecl, tail: Vec<DatatypeDecl>) -> Self {
        Command::DeclareDatatypes(NonEmptyVec::new(head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Identifier;
    use crate::qualified_identifier::QualifiedIdentifier;

    #[test]
    fn declare_datatypes_requires_one_datatype() {
        let ctor = ConstructorDecl::new("A1", vec![("a1a".into(), Sort::leaf(Identifier::simple("A")))]);
        let decl = DatatypeDecl::new("A", ctor, vec![]);
        let cmd = Command::declare_datatypes(decl, vec![]);
        match cmd {
            Command::DeclareDatatypes(decls) => assert_eq!(decls.len(), 1),
            _ => panic!("expected declare-datatypes"),
        }
    }

    #[test]
    fn assert_wraps_term() {
        let t = Term::identifier(QualifiedIdentifier::plain(Identifier::simple("true")));
        let cmd = Command::Assert(t);
        assert!(matches!(cmd, Command::Assert(_)));
    }
}
