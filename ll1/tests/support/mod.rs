#![allow(dead_code)]

use std::collections::BTreeSet;

use ll1::{Grammar, Symbol};

/// The running example: S is LL(1), A and B are nullable.
pub fn scenario_grammar() -> Grammar {
    Grammar::parse(["S -> A B C", "A -> a | e", "B -> b | e", "C -> c"])
        .expect("scenario grammar must parse")
}

pub fn sym(grammar: &Grammar, name: &str) -> Symbol {
    grammar
        .symbol(name)
        .unwrap_or_else(|| panic!("unknown symbol name: {}", name))
}

pub fn set(grammar: &Grammar, names: &[&str]) -> BTreeSet<Symbol> {
    names.iter().map(|name| sym(grammar, name)).collect()
}
