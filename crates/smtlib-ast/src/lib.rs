//! The closed AST algebra for SMT-LIB v2: literals, identifiers, sorts,
//! terms, commands, responses, and S-expressions.
//!
//! Every family here is a finite, closed sum type — pattern matches over
//! them are meant to be exhaustive, and extension happens by adding a
//! variant, never by subclassing. Nodes are immutable once built and own
//! their children outright: no sharing, no cycles, no position metadata,
//! so structural `PartialEq`/`Eq`/`Hash` derives are exactly the equality
//! the wire format needs.

pub mod command;
pub mod identifier;
pub mod literal;
pub mod nonempty;
pub mod qualified_identifier;
pub mod response;
pub mod script;
pub mod sexpr;
pub mod sort;
pub mod symbol;
pub mod term;

pub use command::{Command, ConstructorDecl, DatatypeDecl, InfoFlag, SMTOption};
pub use identifier::Identifier;
pub use literal::{Binary, Decimal, Hexadecimal, Literal, Numeral};
pub use nonempty::NonEmptyVec;
pub use qualified_identifier::QualifiedIdentifier;
pub use response::{CheckSatResult, InfoResponseItem, Response};
pub use script::Script;
pub use sexpr::SExpr;
pub use sort::Sort;
pub use symbol::{Keyword, Symbol};
pub use term::{Attribute, SortedVar, Term, VarBinding};
