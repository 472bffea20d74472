//! LL(1) grammar analysis: FIRST and FOLLOW sets and the predictive
//! parsing table, with derivation traces and conflict reporting.
//!
//! ```
//! use ll1::{Grammar, LlTableExt};
//!
//! let grammar = Grammar::parse([
//!     "S -> A B C",
//!     "A -> a | e",
//!     "B -> b | e",
//!     "C -> c",
//! ])?;
//! let table = grammar.ll_table();
//! assert!(table.is_ll1());
//! # Ok::<(), ll1::GrammarFormatError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]

pub use ll1_grammar::{
    END_MARKER_NAME, EPSILON_NAME, Grammar, GrammarFormatError, GrammarRule, RuleBuilder,
    SymbolBitSet,
};
pub use ll1_predict_sets::{FirstSets, FollowSets, GrammarSetsExt, PerSymbolSets, PredictSets};
pub use ll1_symbol::{Symbol, SymbolSource};
pub use ll1_table::{LlConflict, LlTable, LlTableExt, LlTableKey};
