extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod grammar;
pub use grammar::{Grammar, Rule, Validation};

#[wasm_bindgen]
pub fn grammar_report_to_json(grammar: &str) -> String {
    match Grammar::parse(grammar) {
        Ok(g) => serde_json::json!({
            "rules": g.to_rule_output_vec(),
            "sets": g.to_symbol_set_output_vec(),
            "table": g.to_parsing_table_output(),
        })
        .to_string(),
        Err(e) => format!("{{\"error\":\"{}\"}}", e),
    }
}

#[wasm_bindgen]
pub fn validate_to_json(grammar: &str, input: &str) -> String {
    match Grammar::parse(grammar) {
        Ok(g) => serde_json::to_string(&g.validate(input)).unwrap(),
        Err(e) => format!("{{\"error\":\"{}\"}}", e),
    }
}

#[cfg(test)]
mod parse_tests {
    use crate::Grammar;

    #[test]
    fn simple_parse() {
        let g = Grammar::parse("S -> a").unwrap();

        assert_eq!(g.rules.len(), 1);
        assert_eq!(g.rules[0].left, 'S');
        assert_eq!(g.rules[0].right, vec!['a']);
        assert_eq!(g.start_symbol(), 'S');
    }

    #[test]
    fn alternatives_keep_rule_order() {
        let g = Grammar::parse("S -> aA | b\nA -> cA | (e)").unwrap();

        assert_eq!(g.rules.len(), 4);
        assert_eq!(g.rules[0].right, vec!['a', 'A']);
        assert_eq!(g.rules[1].right, vec!['b']);
        assert_eq!(g.rules[2].right, vec!['c', 'A']);
        assert_eq!(g.rules[3].right, vec!['(', 'e', ')']);
        assert!(g.rules[3].is_empty_production());
    }

    #[test]
    fn continuation_line() {
        let g = Grammar::parse("S -> a\n | b").unwrap();

        assert_eq!(g.rules.len(), 2);
        assert_eq!(g.rules[1].left, 'S');
        assert_eq!(g.rules[1].right, vec!['b']);
    }

    #[test]
    #[should_panic]
    fn two_rightarrows_parse() {
        let _g = Grammar::parse("S -> a -> b").unwrap();
    }

    #[test]
    #[should_panic]
    fn left_side_must_be_single_symbol() {
        let _g = Grammar::parse("SA -> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn left_side_must_be_non_terminal() {
        let _g = Grammar::parse("s -> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn no_previous_left_parse() {
        let _g = Grammar::parse("| a b\n S -> a").unwrap();
    }

    #[test]
    #[should_panic]
    fn empty_grammar() {
        let _g = Grammar::parse("  \n  ").unwrap();
    }

    #[test]
    #[should_panic]
    fn right_side_non_terminal_without_productions() {
        let _g = Grammar::parse("S -> aB").unwrap();
    }
}

#[cfg(test)]
mod first_follow_tests {
    use crate::grammar::{EMPTY, END_MARK};
    use crate::Grammar;
    use std::collections::BTreeSet;

    fn sample() -> Grammar {
        Grammar::parse("S -> aA | b\nA -> cA | (e)").unwrap()
    }

    #[test]
    fn first_sets() {
        let g = sample();

        assert_eq!(g.first[&'S'], BTreeSet::from(['a', 'b']));
        assert_eq!(g.first[&'A'], BTreeSet::from(['c', EMPTY]));
    }

    #[test]
    fn follow_sets() {
        let g = sample();

        assert_eq!(g.follow[&'S'], BTreeSet::from([END_MARK]));
        assert_eq!(g.follow[&'A'], BTreeSet::from([END_MARK]));
    }

    #[test]
    fn follow_of_start_contains_end_mark() {
        let g = Grammar::parse("S -> a").unwrap();

        assert!(g.follow[&'S'].contains(&END_MARK));
    }

    #[test]
    fn terminates_on_mutual_recursion() {
        let g = Grammar::parse("A -> B\nB -> A | (e)").unwrap();

        assert!(g.first[&'A'].contains(&EMPTY));
        assert!(g.first[&'B'].contains(&EMPTY));
        assert!(g.follow[&'A'].contains(&END_MARK));
        assert!(g.follow[&'B'].contains(&END_MARK));
    }

    #[test]
    fn empty_marker_requires_nullable_chain() {
        let g = Grammar::parse("S -> aA\nA -> c").unwrap();

        assert!(!g.first[&'S'].contains(&EMPTY));
        assert!(!g.first[&'A'].contains(&EMPTY));
    }

    #[test]
    fn empty_marker_propagates_through_nullable_chain() {
        let g = Grammar::parse("S -> AB\nA -> (e)\nB -> (e)").unwrap();

        assert!(g.first[&'S'].contains(&EMPTY));
    }

    #[test]
    fn delimiters_are_transparent() {
        let g = Grammar::parse("S -> [a]B\nB -> b").unwrap();

        assert_eq!(g.first[&'S'], BTreeSet::from(['a']));
        assert!(!g.terminals.contains(&'['));
        assert!(!g.terminals.contains(&']'));
    }

    #[test]
    fn terminal_alphabet_excludes_empty_includes_end_mark() {
        let g = sample();

        assert_eq!(g.terminals, vec!['$', 'a', 'b', 'c']);
        assert_eq!(g.non_terminals, vec!['A', 'S']);
    }
}


#[cfg(test)]
mod validate_tests {
    use crate::{Grammar, Validation};

    fn sample() -> Grammar {
        Grammar::parse("S -> aA | b\nA -> cA | (e)").unwrap()
    }

    fn derivation(result: Validation) -> Vec<String> {
        match result {
            Validation::Accepted { derivation } => derivation,
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn accepts_with_derivation_trace() {
        let g = sample();

        assert_eq!(derivation(g.validate("ac")), vec!["S", "aA", "acA", "ac"]);
    }

    #[test]
    fn rejects_without_trace() {
        let g = sample();

        assert_eq!(g.validate("acb"), Validation::Rejected);
        assert_eq!(g.validate("ca"), Validation::Rejected);
    }

    #[test]
    fn unknown_symbol_is_invalid_input_not_rejection() {
        let g = sample();

        assert_eq!(g.validate("ad"), Validation::InvalidInput);
        assert_eq!(g.validate("x"), Validation::InvalidInput);
    }

    #[test]
    fn empty_input_with_nullable_start() {
        let g = Grammar::parse("S -> (e)").unwrap();

        assert_eq!(derivation(g.validate("")), vec!["S", "ε"]);
    }

    #[test]
    fn empty_input_without_nullable_start() {
        let g = Grammar::parse("S -> a").unwrap();

        assert_eq!(g.validate(""), Validation::Rejected);
    }

    #[test]
    fn conflict_branches_tried_in_rule_order() {
        let g = Grammar::parse("S -> ab | ac").unwrap();

        // rule 0 is attempted first and fails; only the winning branch
        // may appear in the trace
        assert_eq!(derivation(g.validate("ac")), vec!["S", "ac"]);
        assert_eq!(derivation(g.validate("ab")), vec!["S", "ab"]);
    }

    #[test]
    fn backtracking_recovers_deeper_alternative() {
        let g = Grammar::parse("S -> aS | a").unwrap();

        assert_eq!(derivation(g.validate("aa")), vec!["S", "aS", "aa"]);
        assert_eq!(g.validate("aaa").is_accepted(), true);
        assert_eq!(g.validate(""), Validation::Rejected);
    }

    #[test]
    fn revalidation_is_idempotent() {
        let g = sample();

        assert_eq!(g.validate("ac"), g.validate("ac"));
        assert_eq!(g.validate("acb"), g.validate("acb"));
        assert_eq!(g.validate("ad"), g.validate("ad"));
    }

    #[test]
    fn verdicts_serialize_with_a_tag() {
        let g = sample();

        let json = serde_json::to_string(&g.validate("b")).unwrap();
        assert_eq!(json, r#"{"verdict":"accepted","derivation":["S","b"]}"#);
        let json = serde_json::to_string(&g.validate("cc")).unwrap();
        assert_eq!(json, r#"{"verdict":"rejected"}"#);
    }
}
