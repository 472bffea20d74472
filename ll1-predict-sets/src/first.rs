//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use ll1_grammar::{Grammar, GrammarRule, SymbolBitSet};
use ll1_symbol::Symbol;

use super::{PerSymbolSets, PredictSets};

/// Collector of FIRST sets.
///
/// FIRST(X) is the set of terminals, and possibly epsilon, that can begin
/// a string derived from X. Terminals and epsilon are seeded with their
/// singleton sets; nonterminal sets grow monotonically until a full pass
/// over the rules adds nothing, which bounds the loop by the alphabet
/// size.
pub struct FirstSets {
    map: PerSymbolSets,
    trace: Vec<String>,
    epsilon: Symbol,
}

impl FirstSets {
    /// Computes all FIRST sets of the grammar.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = FirstSets {
            map: BTreeMap::new(),
            trace: vec![],
            epsilon: grammar.epsilon(),
        };

        let terminal_set = SymbolBitSet::terminal(grammar);
        for terminal in terminal_set.iter() {
            this.map.insert(terminal, BTreeSet::from([terminal]));
        }
        this.map.insert(this.epsilon, BTreeSet::from([this.epsilon]));
        for rule in grammar.rules() {
            this.map.entry(rule.lhs).or_default();
        }

        this.collect_from(grammar);
        this
    }

    /// Calculates the FIRST set for a string of symbols: accumulate
    /// FIRST(Y) minus epsilon for each symbol Y, stopping at the first Y
    /// whose FIRST set lacks epsilon; epsilon itself belongs to the result
    /// iff the walk exhausts the whole sequence, including the empty one.
    pub fn first_of_sequence(&self, sequence: &[Symbol]) -> BTreeSet<Symbol> {
        let mut result = BTreeSet::new();
        for &sym in sequence {
            let first = self
                .map
                .get(&sym)
                .expect("FIRST set not found for a sequence symbol");
            result.extend(first.iter().copied().filter(|&s| s != self.epsilon));
            if !first.contains(&self.epsilon) {
                return result;
            }
        }
        result.insert(self.epsilon);
        result
    }

    /// Returns the derivation trace: one line per rule examined per pass
    /// and one line per set-growth event.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    fn collect_from(&mut self, grammar: &Grammar) {
        let mut changed = true;
        let mut pass = 0u32;
        while changed {
            changed = false;
            pass += 1;
            for rule in grammar.rules() {
                self.trace.push(format!(
                    "Checking FIRST({}) from production {}",
                    grammar.name_of(rule.lhs),
                    grammar.rule_string(rule),
                ));
                changed |= self.process_rule(grammar, rule);
            }
            debug!("FIRST pass {} done, changed: {}", pass, changed);
        }
    }

    fn process_rule(&mut self, grammar: &Grammar, rule: &GrammarRule) -> bool {
        let mut changed = false;
        let mut exhausted = true;
        for &sym in &rule.rhs[..] {
            let sym_first = self
                .map
                .get(&sym)
                .expect("FIRST set not found for a right-hand side symbol")
                .clone();
            let addition: BTreeSet<Symbol> = sym_first
                .iter()
                .copied()
                .filter(|&s| s != self.epsilon)
                .collect();
            let lhs_first = self
                .map
                .get_mut(&rule.lhs)
                .expect("FIRST set not found for a left-hand side");
            let before = lhs_first.len();
            lhs_first.extend(addition.iter().copied());
            if lhs_first.len() != before {
                changed = true;
                self.trace.push(format!(
                    "Added FIRST({}) - {{e}} = {} to FIRST({})",
                    grammar.name_of(sym),
                    grammar.set_string(&addition),
                    grammar.name_of(rule.lhs),
                ));
            }
            if !sym_first.contains(&self.epsilon) {
                // Nothing further in this rule can be reached without
                // deriving epsilon through this symbol first.
                exhausted = false;
                break;
            }
        }
        if exhausted {
            let lhs_first = self
                .map
                .get_mut(&rule.lhs)
                .expect("FIRST set not found for a left-hand side");
            if lhs_first.insert(self.epsilon) {
                changed = true;
                self.trace.push(format!(
                    "Added e to FIRST({}) since all symbols can derive e",
                    grammar.name_of(rule.lhs),
                ));
            }
        }
        changed
    }
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
