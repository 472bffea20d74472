mod support;

use ll1::{Grammar, GrammarSetsExt, PredictSets};

use support::{scenario_grammar, set, sym};

#[test]
fn scenario_follow_sets() {
    let grammar = scenario_grammar();
    let follow_sets = grammar.follow_sets();
    let sets = follow_sets.predict_sets();

    assert_eq!(sets.get(&sym(&grammar, "S")), Some(&set(&grammar, &["$"])));
    assert_eq!(sets.get(&sym(&grammar, "A")), Some(&set(&grammar, &["b", "c"])));
    assert_eq!(sets.get(&sym(&grammar, "B")), Some(&set(&grammar, &["c"])));
    assert_eq!(sets.get(&sym(&grammar, "C")), Some(&set(&grammar, &["$"])));
}

#[test]
fn end_marker_is_always_in_follow_of_start() {
    for rules in [
        &["S -> a"][..],
        &["S -> S a", "S -> a"][..],
        &["S -> e"][..],
        &["S -> A", "A -> S"][..],
    ] {
        let grammar = Grammar::parse(rules.iter().copied()).unwrap();
        let follow_sets = grammar.follow_sets();
        let start = grammar.start_symbol().unwrap();
        assert!(
            follow_sets.follow(start).contains(&grammar.end_marker()),
            "end marker missing from FOLLOW(start) for {:?}",
            rules
        );
    }
}

#[test]
fn follow_of_unregistered_symbol_is_empty() {
    let grammar = scenario_grammar();
    let follow_sets = grammar.follow_sets();
    assert!(follow_sets.follow(sym(&grammar, "a")).is_empty());
    assert!(follow_sets.follow(grammar.epsilon()).is_empty());
}

#[test]
fn nullable_tail_propagates_follow_of_lhs() {
    // B's tail can vanish, so FOLLOW(S) flows into FOLLOW(B).
    let grammar = Grammar::parse(["S -> B A", "A -> a | e", "B -> b"]).unwrap();
    let follow_sets = grammar.follow_sets();
    assert_eq!(
        follow_sets.follow(sym(&grammar, "B")),
        &set(&grammar, &["a", "$"])
    );
}

#[test]
fn trace_starts_with_start_symbol_seed() {
    let grammar = scenario_grammar();
    let follow_sets = grammar.follow_sets();
    let trace = follow_sets.trace();
    assert_eq!(trace[0], "Added $ to FOLLOW(S) since it is the start symbol");
    assert!(
        trace
            .iter()
            .any(|line| line == "Added FIRST(C) - {e} = {c} to FOLLOW(B)")
    );
}

#[test]
fn computation_is_idempotent() {
    let grammar = scenario_grammar();
    let first_sets = grammar.first_sets();
    let once = grammar.follow_sets_with_first(&first_sets);
    let twice = grammar.follow_sets_with_first(&first_sets);
    assert_eq!(once.predict_sets(), twice.predict_sets());
    assert_eq!(once.trace(), twice.trace());
}
