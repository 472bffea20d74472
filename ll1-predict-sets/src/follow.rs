//! FOLLOW sets.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use ll1_grammar::Grammar;
use ll1_symbol::Symbol;

use super::{FirstSets, PerSymbolSets, PredictSets};

static EMPTY_SET: BTreeSet<Symbol> = BTreeSet::new();

/// FOLLOW sets.
///
/// FOLLOW(A) is the set of terminals, and possibly the end marker, that
/// can immediately follow A in some derivation from the start symbol.
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
    trace: Vec<String>,
}

impl FollowSets {
    /// Computes all FOLLOW sets of the grammar.
    ///
    /// The end marker is placed in FOLLOW(start) up front. Then, until a
    /// full pass adds nothing: for every rule A -> X1..Xn and every
    /// nonterminal Xi, FIRST(Xi+1..Xn) minus epsilon flows into
    /// FOLLOW(Xi), and whenever that FIRST set contains epsilon,
    /// vacuously so when the tail is empty, all of FOLLOW(A) flows into
    /// FOLLOW(Xi).
    pub fn new(grammar: &Grammar, first_sets: &FirstSets) -> Self {
        let mut this = FollowSets {
            map: BTreeMap::new(),
            trace: vec![],
        };

        for rule in grammar.rules() {
            this.map.entry(rule.lhs).or_default();
        }
        let start = grammar
            .start_symbol()
            .expect("grammar has no start symbol");
        this.map
            .get_mut(&start)
            .expect("start symbol has no FOLLOW entry")
            .insert(grammar.end_marker());
        this.trace.push(format!(
            "Added $ to FOLLOW({}) since it is the start symbol",
            grammar.name_of(start),
        ));

        this.collect_from(grammar, first_sets);
        this
    }

    /// Returns the FOLLOW set of a symbol.
    ///
    /// A symbol never registered as a nonterminal has an empty FOLLOW
    /// set, so terminal-only queries are permitted.
    pub fn follow(&self, sym: Symbol) -> &BTreeSet<Symbol> {
        self.map.get(&sym).unwrap_or(&EMPTY_SET)
    }

    /// Returns the derivation trace: one line per contribution that
    /// actually grew a set.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    fn collect_from(&mut self, grammar: &Grammar, first_sets: &FirstSets) {
        let epsilon = grammar.epsilon();
        let mut changed = true;
        let mut pass = 0u32;
        while changed {
            changed = false;
            pass += 1;
            for rule in grammar.rules() {
                for (i, &sym) in rule.rhs.iter().enumerate() {
                    if !grammar.is_nonterminal(sym) {
                        continue;
                    }
                    let beta = &rule.rhs[i + 1..];
                    let first_beta = first_sets.first_of_sequence(beta);
                    let from_first: BTreeSet<Symbol> = first_beta
                        .iter()
                        .copied()
                        .filter(|&s| s != epsilon)
                        .collect();

                    let followed = self
                        .map
                        .get_mut(&sym)
                        .expect("FOLLOW set not found for a nonterminal");
                    let before = followed.len();
                    followed.extend(from_first.iter().copied());
                    if followed.len() != before {
                        changed = true;
                        self.trace.push(format!(
                            "Added FIRST({}) - {{e}} = {} to FOLLOW({})",
                            grammar.rhs_string(beta),
                            grammar.set_string(&from_first),
                            grammar.name_of(sym),
                        ));
                    }

                    if first_beta.contains(&epsilon) {
                        let lhs_follow = self
                            .map
                            .get(&rule.lhs)
                            .expect("FOLLOW set not found for a left-hand side")
                            .clone();
                        let followed = self
                            .map
                            .get_mut(&sym)
                            .expect("FOLLOW set not found for a nonterminal");
                        let before = followed.len();
                        followed.extend(lhs_follow.iter().copied());
                        if followed.len() != before {
                            changed = true;
                            self.trace.push(format!(
                                "Since FIRST({}) contains e, added FOLLOW({}) = {} to FOLLOW({})",
                                grammar.rhs_string(beta),
                                grammar.name_of(rule.lhs),
                                grammar.set_string(&lhs_follow),
                                grammar.name_of(sym),
                            ));
                        }
                    }
                }
            }
            debug!("FOLLOW pass {} done, changed: {}", pass, changed);
        }
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
