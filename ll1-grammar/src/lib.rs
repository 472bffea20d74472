//! The grammar model for LL(1) analysis: rules grouped per left-hand side,
//! the start symbol, reserved epsilon and end-marker symbols, name
//! interning, and loading from rule text.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod grammar;
mod load;
mod rule_builder;
mod string_interner;
mod symbol_bit_set;

pub use crate::grammar::{END_MARKER_NAME, EPSILON_NAME, Grammar, GrammarRule};
pub use crate::load::GrammarFormatError;
pub use crate::rule_builder::RuleBuilder;
pub use crate::symbol_bit_set::SymbolBitSet;
