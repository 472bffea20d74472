//! Informs whether symbols are terminal or nonterminal.

use std::{iter, ops};

use bit_vec::BitVec;

use ll1_symbol::Symbol;

use crate::grammar::Grammar;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` with all bits set to `elem`.
    pub fn from_elem(grammar: &Grammar, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(grammar.num_syms(), elem),
        }
    }

    /// Constructs the set of terminal symbols: every symbol used on some
    /// right-hand side that is neither a left-hand side nor epsilon.
    ///
    /// Constructs a data structure in O(n) time.
    pub fn terminal(grammar: &Grammar) -> Self {
        let mut this = Self::from_elem(grammar, false);
        for rule in grammar.rules() {
            for &sym in &rule.rhs[..] {
                this.set(sym, true);
            }
        }
        for rule in grammar.rules() {
            this.set(rule.lhs, false);
        }
        this.set(grammar.epsilon(), false);
        this
    }

    /// Sets the given symbol's membership.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        self.bit_vec.set(sym.usize(), value);
    }

    /// Checks whether the given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in this set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl ops::Index<Symbol> for SymbolBitSet {
    type Output = bool;

    fn index(&self, index: Symbol) -> &Self::Output {
        if self.has_sym(index) { &true } else { &false }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(id.into());
            }
        }
        None
    }
}
