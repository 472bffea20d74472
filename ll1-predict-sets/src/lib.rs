//! Predict sets: FIRST and FOLLOW set computation by fixed-point
//! iteration, with a human-readable derivation trace for each stage.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod first;
mod follow;
mod sets;
mod sets_ext;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::sets::{PerSymbolSets, PredictSets};
pub use self::sets_ext::GrammarSetsExt;
