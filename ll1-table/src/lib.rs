//! LL(1) predictive-parsing table construction.
//!
//! A table cell `(A, t)` holds the rule `A -> w` iff `t` is in `FIRST(w)`,
//! or epsilon is in `FIRST(w)` and `t` is in `FOLLOW(A)`. Every cell
//! overwrite by a different rule is recorded as a conflict; construction
//! always completes and the last write wins, so the caller decides how to
//! react to an ambiguous grammar.

#![deny(unsafe_code)]
#![deny(missing_docs)]

use std::collections::BTreeMap;

use log::debug;

use ll1_grammar::{Grammar, GrammarRule};
use ll1_predict_sets::{FirstSets, FollowSets, GrammarSetsExt};
use ll1_symbol::Symbol;

/// LL(1) parse table.
pub struct LlTable {
    map: BTreeMap<LlTableKey, GrammarRule>,
    conflicts: Vec<LlConflict>,
    trace: Vec<String>,
}

/// A table cell address.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
pub struct LlTableKey {
    /// The nonterminal being expanded.
    pub nonterminal: Symbol,
    /// The lookahead: a terminal or the end marker.
    pub lookahead: Symbol,
}

/// Two distinct rules claiming the same table cell. A non-empty conflict
/// list means the grammar is not LL(1).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LlConflict {
    /// The nonterminal of the contested cell.
    pub nonterminal: Symbol,
    /// The lookahead of the contested cell.
    pub lookahead: Symbol,
    /// The rule previously stored in the cell.
    pub existing: GrammarRule,
    /// The rule that overwrote it.
    pub proposed: GrammarRule,
}

enum CellOrigin {
    First,
    FollowViaEpsilon,
}

impl LlTable {
    /// Builds the LL(1) table from the grammar and its prediction sets.
    pub fn new(grammar: &Grammar, first_sets: &FirstSets, follow_sets: &FollowSets) -> Self {
        let mut this = LlTable {
            map: BTreeMap::new(),
            conflicts: vec![],
            trace: vec![],
        };
        let epsilon = grammar.epsilon();

        for rule in grammar.rules() {
            let rhs_first = first_sets.first_of_sequence(&rule.rhs);
            for &terminal in &rhs_first {
                if terminal == epsilon {
                    continue;
                }
                this.insert(grammar, rule, terminal, CellOrigin::First);
            }
            if rhs_first.contains(&epsilon) {
                for &lookahead in follow_sets.follow(rule.lhs) {
                    this.insert(grammar, rule, lookahead, CellOrigin::FollowViaEpsilon);
                }
            }
        }

        debug!(
            "LL(1) table built: {} cells, {} conflicts",
            this.map.len(),
            this.conflicts.len()
        );
        this
    }

    /// Returns the rule stored for the given nonterminal and lookahead.
    pub fn get(&self, nonterminal: Symbol, lookahead: Symbol) -> Option<&GrammarRule> {
        self.map.get(&LlTableKey {
            nonterminal,
            lookahead,
        })
    }

    /// Iterates over the table cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&LlTableKey, &GrammarRule)> {
        self.map.iter()
    }

    /// Returns the number of filled cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no filled cells.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the conflicts recorded during construction, in write order.
    pub fn conflicts(&self) -> &[LlConflict] {
        &self.conflicts
    }

    /// Whether the grammar turned out to be LL(1).
    pub fn is_ll1(&self) -> bool {
        self.conflicts.is_empty()
    }

    /// Returns the construction trace: one line per cell write.
    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    fn insert(
        &mut self,
        grammar: &Grammar,
        rule: &GrammarRule,
        lookahead: Symbol,
        origin: CellOrigin,
    ) {
        let key = LlTableKey {
            nonterminal: rule.lhs,
            lookahead,
        };
        if let Some(existing) = self.map.get(&key) {
            if existing != rule {
                self.conflicts.push(LlConflict {
                    nonterminal: rule.lhs,
                    lookahead,
                    existing: existing.clone(),
                    proposed: rule.clone(),
                });
            }
        }
        self.map.insert(key, rule.clone());
        self.trace.push(match origin {
            CellOrigin::First => format!(
                "From FIRST({}) added {} to table[{}][{}]",
                grammar.rhs_string(&rule.rhs),
                grammar.rule_string(rule),
                grammar.name_of(rule.lhs),
                grammar.name_of(lookahead),
            ),
            CellOrigin::FollowViaEpsilon => format!(
                "From FOLLOW({}) (e in FIRST) added {} to table[{}][{}]",
                grammar.name_of(rule.lhs),
                grammar.rule_string(rule),
                grammar.name_of(rule.lhs),
                grammar.name_of(lookahead),
            ),
        });
    }
}

/// Convenience construction of the LL(1) table straight from a grammar.
pub trait LlTableExt {
    /// Runs FIRST, FOLLOW and table construction in order.
    fn ll_table(&self) -> LlTable;
}

impl LlTableExt for Grammar {
    fn ll_table(&self) -> LlTable {
        let first_sets = self.first_sets();
        let follow_sets = self.follow_sets_with_first(&first_sets);
        LlTable::new(self, &first_sets, &follow_sets)
    }
}
