//! Identifiers: plain symbols, or symbols annotated with numeric indices.

use crate::literal::Numeral;
use crate::nonempty::NonEmptyVec;
use crate::symbol::Symbol;

/// Either a plain symbol, or an indexed identifier `(_ symbol n1 ... nk)`
/// carrying a non-empty sequence of numeral indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Simple(Symbol),
    Indexed {
        symbol: Symbol,
        indices: NonEmptyVec<Numeral>,
    },
}

impl Identifier {
    pub fn simple(symbol: impl Into<Symbol>) -> Self {
        Identifier::Simple(symbol.into())
    }

    pub fn indexed(symbol: impl Into<Symbol>, head: Numeral, tail: Vec<Numeral>) -> Self {
        Identifier::Indexed {
            symbol: symbol.into(),
            indices: NonEmptyVec::new(head, tail),
        }
    }

    pub fn symbol(&self) -> &Symbol {
        match self {
            Identifier::Simple(s) => s,
            Identifier::Indexed { symbol, .. } => symbol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_identifier_keeps_symbol() {
        let id = Identifier::simple("f");
        assert_eq!(id.symbol().as_str(), "f");
    }

    #[test]
    fn indexed_identifier_requires_one_index() {
        let id = Identifier::indexed("extract", Numeral::from_u64(3), vec![Numeral::from_u64(0)]);
        match &id {
            Identifier::Indexed { indices, .. } => assert_eq!(indices.len(), 2),
            _ => panic!("expected indexed identifier"),
        }
    }
}
