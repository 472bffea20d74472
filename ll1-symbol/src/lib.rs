//! A type that can represent symbols in a context-free grammar. Symbols are
//! distinguished by their IDs.

#![deny(unsafe_code)]
#![deny(missing_docs)]

mod source;
mod symbol;

pub use self::source::SymbolSource;
pub use self::symbol::{Symbol, SymbolRepr};
