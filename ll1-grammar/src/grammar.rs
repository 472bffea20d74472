//! Definitions of the grammar type and its rules.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use ll1_symbol::{Symbol, SymbolSource};

use crate::rule_builder::RuleBuilder;
use crate::string_interner::StringInterner;

/// The reserved name that denotes the empty string in rule text.
pub const EPSILON_NAME: &str = "e";
/// The reserved name of the end-of-input marker. Never written in rule
/// text; it only appears in FOLLOW sets and table lookahead columns.
pub const END_MARKER_NAME: &str = "$";

/// A context-free grammar with named symbols.
///
/// Rules are grouped per left-hand side. Left-hand sides keep their order
/// of first appearance and each left-hand side keeps its rules in insertion
/// order; this order drives traces and table building, not semantics.
///
/// Symbol classification is derived, never stored: a symbol is a
/// nonterminal iff it occurs as some rule's left-hand side; every other
/// symbol occurring on a right-hand side is a terminal, except the
/// reserved epsilon symbol.
pub struct Grammar {
    sym_source: SymbolSource,
    interner: StringInterner,
    lhs_order: Vec<Symbol>,
    rules: BTreeMap<Symbol, Vec<GrammarRule>>,
    start: Option<Symbol>,
    epsilon: Symbol,
    end_marker: Symbol,
}

/// Standard grammar rule representation.
///
/// An epsilon rule written with the explicit `e` token has the one-element
/// right-hand side `[epsilon]`; a right-hand side may also be truly empty,
/// which the set engines treat as trivially nullable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrammarRule {
    /// The rule's left-hand side symbol.
    pub lhs: Symbol,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    /// Creates an empty grammar. The reserved epsilon and end-marker
    /// symbols are interned up front.
    pub fn new() -> Self {
        let mut this = Grammar {
            sym_source: SymbolSource::new(),
            interner: StringInterner::new(),
            lhs_order: vec![],
            rules: BTreeMap::new(),
            start: None,
            epsilon: Symbol::default(),
            end_marker: Symbol::default(),
        };
        this.epsilon = this.intern(EPSILON_NAME);
        this.end_marker = this.intern(END_MARKER_NAME);
        this
    }

    /// Interns a symbol name, returning the same symbol for the same name.
    pub fn intern(&mut self, name: &str) -> Symbol {
        match self.interner.get(name) {
            Some(index) => index.into(),
            None => {
                let sym = self.sym_source.next_sym();
                let index = self.interner.get_or_intern(name);
                debug_assert_eq!(index, sym.usize(), "interner out of sync with symbol source");
                sym
            }
        }
    }

    /// Looks up the symbol for a name without interning it.
    pub fn symbol(&self, name: &str) -> Option<Symbol> {
        self.interner.get(name).map(Symbol::from)
    }

    /// Resolves a symbol back to its name.
    pub fn name_of(&self, sym: Symbol) -> &str {
        self.interner
            .resolve(sym.usize())
            .expect("symbol not interned in this grammar")
    }

    /// The reserved epsilon symbol.
    pub fn epsilon(&self) -> Symbol {
        self.epsilon
    }

    /// The reserved end-of-input marker symbol.
    pub fn end_marker(&self) -> Symbol {
        self.end_marker
    }

    /// The start symbol: the left-hand side of the first rule added, unless
    /// overridden with [`fn set_start`].
    ///
    /// [`fn set_start`]: Grammar::set_start
    pub fn start_symbol(&self) -> Option<Symbol> {
        self.start
    }

    /// Overrides the start symbol.
    pub fn set_start(&mut self, start: Symbol) {
        self.start = Some(start);
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Starts building a grammar rule.
    pub fn rule(&mut self, lhs: Symbol) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Appends a rule. The first rule added fixes the start symbol.
    pub fn add_rule(&mut self, rule: GrammarRule) {
        if self.start.is_none() {
            self.start = Some(rule.lhs);
        }
        let lhs = rule.lhs;
        let lhs_order = &mut self.lhs_order;
        self.rules
            .entry(lhs)
            .or_insert_with(|| {
                lhs_order.push(lhs);
                vec![]
            })
            .push(rule);
    }

    /// Iterates over all rules in grammar order: left-hand sides in order
    /// of first appearance, each with its rules in insertion order.
    pub fn rules(&self) -> impl Iterator<Item = &GrammarRule> {
        self.lhs_order
            .iter()
            .flat_map(|lhs| self.rules[lhs].iter())
    }

    /// Iterates over nonterminals in order of first appearance.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> {
        self.lhs_order.iter().copied()
    }

    /// Returns the rules of the given nonterminal, or an empty slice for
    /// any other symbol.
    pub fn productions_of(&self, sym: Symbol) -> &[GrammarRule] {
        self.rules.get(&sym).map_or(&[], |rules| &rules[..])
    }

    /// Whether the symbol occurs as some rule's left-hand side.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.rules.contains_key(&sym)
    }

    /// Renders a symbol sequence as space-separated names.
    pub fn rhs_string(&self, rhs: &[Symbol]) -> String {
        rhs.iter()
            .map(|&sym| self.name_of(sym))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Renders a rule as `LHS -> RHS`.
    pub fn rule_string(&self, rule: &GrammarRule) -> String {
        format!("{} -> {}", self.name_of(rule.lhs), self.rhs_string(&rule.rhs))
    }

    /// Renders a symbol set as `{a, b}`, name-sorted for determinism.
    pub fn set_string(&self, set: &BTreeSet<Symbol>) -> String {
        let mut names: Vec<&str> = set.iter().map(|&sym| self.name_of(sym)).collect();
        names.sort_unstable();
        format!("{{{}}}", names.join(", "))
    }
}
