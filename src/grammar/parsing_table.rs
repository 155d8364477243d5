use std::collections::BTreeSet;

use super::{Grammar, EMPTY};

impl Grammar {
    /// Terminals under which rule `index` is a valid expansion choice:
    /// the sequence-FIRST of its right-hand side, with the empty marker
    /// traded for the left side's FOLLOW when the side can vanish.
    pub fn predict_set(&self, index: usize) -> BTreeSet<char> {
        let rule = &self.rules[index];
        let mut predict = Self::sequence_first(&rule.right, &self.first);
        if predict.remove(&EMPTY) {
            if let Some(left_follow) = self.follow.get(&rule.left) {
                predict.extend(left_follow.iter().copied());
            }
        }
        predict
    }

    /// Every rule lands in its left side's row under each terminal of its
    /// predict set. Cells holding several rule numbers are kept as-is;
    /// they mark where the grammar is not strictly LL(1).
    pub(crate) fn build_table(&self) -> Vec<Vec<BTreeSet<usize>>> {
        let mut table =
            vec![vec![BTreeSet::new(); self.terminals.len()]; self.non_terminals.len()];
        for index in 0..self.rules.len() {
            if let Some(row) = self.row_of(self.rules[index].left) {
                for terminal in self.predict_set(index) {
                    if let Some(col) = self.col_of(terminal) {
                        table[row][col].insert(index);
                    }
                }
            }
        }
        table
    }
}
