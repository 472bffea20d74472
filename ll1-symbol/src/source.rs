//! Source of numeric symbols.

use crate::symbol::{FIRST_ID, NULL_ID, Symbol, SymbolRepr};

/// A source of numeric symbols.
#[allow(missing_copy_implementations)]
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    next_id: SymbolRepr,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        Self { next_id: FIRST_ID }
    }

    /// Returns generated symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        let mut result = [Default::default(); N];
        for dest in &mut result {
            *dest = self.next_sym();
        }
        result
    }

    /// Generates a new unique symbol.
    pub fn next_sym(&mut self) -> Symbol {
        let ret = self.next_id.into();
        self.next_id += 1;
        debug_assert_ne!(self.next_id, NULL_ID, "ran out of Symbol space?");
        ret
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.next_id as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_consecutive() {
        let mut source = SymbolSource::new();
        let [a, b, c] = source.sym();
        assert_eq!(a.usize(), 0);
        assert_eq!(b.usize(), 1);
        assert_eq!(c.usize(), 2);
        assert_eq!(source.num_syms(), 3);
        assert_eq!(source.next_sym().usize(), 3);
    }
}
