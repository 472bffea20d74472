mod support;

use ll1::Grammar;

use support::sym;

#[test]
fn start_symbol_is_first_lhs_and_never_reassigned() {
    let grammar = Grammar::parse(["S -> a", "T -> S b", "S -> c"]).unwrap();
    assert_eq!(grammar.start_symbol(), Some(sym(&grammar, "S")));
    assert_eq!(grammar.productions_of(sym(&grammar, "S")).len(), 2);
}

#[test]
fn lines_without_arrow_are_skipped() {
    let grammar = Grammar::parse(["# a comment", "", "S -> a", "not a rule"]).unwrap();
    assert_eq!(grammar.start_symbol(), Some(sym(&grammar, "S")));
    assert_eq!(grammar.rules().count(), 1);
}

#[test]
fn no_matching_line_is_a_format_error() {
    let result = Grammar::parse(["not a rule"]);
    let err = result.err().expect("parse must fail");
    assert!(err.to_string().contains("grammar format error"));
}

#[test]
fn no_lines_at_all_is_a_format_error() {
    assert!(Grammar::parse(Vec::<&str>::new()).is_err());
}

#[test]
fn epsilon_token_is_stored_as_one_element_sequence() {
    let grammar = Grammar::parse(["A -> e"]).unwrap();
    let rules = grammar.productions_of(sym(&grammar, "A"));
    assert_eq!(rules.len(), 1);
    assert_eq!(&rules[0].rhs[..], &[grammar.epsilon()]);
}

#[test]
fn alternatives_split_on_pipe() {
    let grammar = Grammar::parse(["S -> a b | c"]).unwrap();
    let rules = grammar.productions_of(sym(&grammar, "S"));
    assert_eq!(rules.len(), 2);
    assert_eq!(&rules[0].rhs[..], &[sym(&grammar, "a"), sym(&grammar, "b")]);
    assert_eq!(&rules[1].rhs[..], &[sym(&grammar, "c")]);
}

#[test]
fn repeated_lhs_lines_accumulate() {
    let grammar = Grammar::parse(["S -> a", "S -> b"]).unwrap();
    assert_eq!(grammar.productions_of(sym(&grammar, "S")).len(), 2);
}

#[test]
fn empty_alternative_yields_empty_rhs() {
    let grammar = Grammar::parse(["A -> x |"]).unwrap();
    let rules = grammar.productions_of(sym(&grammar, "A"));
    assert_eq!(rules.len(), 2);
    assert!(rules[1].rhs.is_empty());
}

#[test]
fn grammar_order_groups_rules_by_first_appearance_of_lhs() {
    let grammar = Grammar::parse(["S -> A", "A -> a", "S -> b"]).unwrap();
    let order: Vec<_> = grammar.rules().map(|rule| rule.lhs).collect();
    let s = sym(&grammar, "S");
    let a = sym(&grammar, "A");
    assert_eq!(order, vec![s, s, a]);
}

#[test]
fn builder_accumulates_rules_and_sets_start() {
    let mut grammar = Grammar::new();
    let start = grammar.intern("S");
    let a = grammar.intern("a");
    let b = grammar.intern("b");
    grammar.rule(start).rhs([a, b]).rhs([b]);
    assert_eq!(grammar.start_symbol(), Some(start));
    assert_eq!(grammar.productions_of(start).len(), 2);
    assert!(grammar.is_nonterminal(start));
    assert!(!grammar.is_nonterminal(a));
}

#[test]
fn interning_is_idempotent() {
    let mut grammar = Grammar::new();
    let first = grammar.intern("X");
    let second = grammar.intern("X");
    assert_eq!(first, second);
    assert_eq!(grammar.name_of(first), "X");
}
