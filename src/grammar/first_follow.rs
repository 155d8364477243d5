use std::collections::{BTreeMap, BTreeSet};

use super::{grammar::Rule, Grammar, EMPTY, END_MARK};

impl Grammar {
    /// Terminals that can start a string derived from `seq`, scanning left
    /// to right past delimiters. The result contains the empty marker
    /// exactly when the whole sequence can derive the empty string.
    pub(crate) fn sequence_first(
        seq: &[char],
        first: &BTreeMap<char, BTreeSet<char>>,
    ) -> BTreeSet<char> {
        let mut out = BTreeSet::new();
        let mut vanishes = true;
        for &symbol in seq.iter().filter(|&&c| !Self::is_delimiter(c)) {
            if symbol == EMPTY {
                continue;
            }
            if Self::is_terminal(symbol) {
                out.insert(symbol);
                vanishes = false;
                break;
            }
            match first.get(&symbol) {
                Some(symbol_first) => {
                    out.extend(symbol_first.iter().copied().filter(|&c| c != EMPTY));
                    if !symbol_first.contains(&EMPTY) {
                        vanishes = false;
                        break;
                    }
                }
                // non-terminal without productions derives nothing
                None => {
                    vanishes = false;
                    break;
                }
            }
        }
        if vanishes {
            out.insert(EMPTY);
        }
        out
    }

    /// FIRST as the fixed point of extending each left side with the
    /// sequence-FIRST of its right-hand sides. Sets only grow, so the loop
    /// terminates on any rule graph, cyclic ones included.
    pub(crate) fn compute_first(
        rules: &[Rule],
        non_terminals: &[char],
    ) -> BTreeMap<char, BTreeSet<char>> {
        let mut first: BTreeMap<char, BTreeSet<char>> =
            non_terminals.iter().map(|&n| (n, BTreeSet::new())).collect();

        let mut changed = true;
        while changed {
            changed = false;
            for rule in rules {
                let add = Self::sequence_first(&rule.right, &first);
                if let Some(set) = first.get_mut(&rule.left) {
                    for symbol in add {
                        changed |= set.insert(symbol);
                    }
                }
            }
        }
        first
    }

    /// FOLLOW as a fixed point over rule bodies: each occurrence of a
    /// non-terminal receives the FIRST of what trails it, plus the left
    /// side's FOLLOW when the trailing part can vanish. The start symbol
    /// is seeded with the end-of-input marker.
    pub(crate) fn compute_follow(
        rules: &[Rule],
        non_terminals: &[char],
        first: &BTreeMap<char, BTreeSet<char>>,
    ) -> BTreeMap<char, BTreeSet<char>> {
        let mut follow: BTreeMap<char, BTreeSet<char>> =
            non_terminals.iter().map(|&n| (n, BTreeSet::new())).collect();
        if let Some(start) = rules.first().map(|r| r.left) {
            if let Some(set) = follow.get_mut(&start) {
                set.insert(END_MARK);
            }
        }

        let mut changed = true;
        while changed {
            changed = false;
            for rule in rules {
                let body: Vec<char> = rule.symbols().collect();
                for (i, &symbol) in body.iter().enumerate() {
                    if Self::is_terminal(symbol) {
                        continue;
                    }
                    let mut add = Self::sequence_first(&body[i + 1..], first);
                    if add.remove(&EMPTY) {
                        add.extend(follow[&rule.left].iter().copied());
                    }
                    if let Some(set) = follow.get_mut(&symbol) {
                        for terminal in add {
                            changed |= set.insert(terminal);
                        }
                    }
                }
            }
        }
        follow
    }
}
