use std::collections::{BTreeMap, BTreeSet};

use ll1_symbol::Symbol;

/// The representation of FIRST and FOLLOW sets.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// Common access to computed prediction sets.
pub trait PredictSets {
    /// Returns a reference to the computed sets.
    fn predict_sets(&self) -> &PerSymbolSets;
}
