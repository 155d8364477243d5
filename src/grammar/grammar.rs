use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::{DELIMITERS, EMPTY, END_MARK, EPSILON};

/// A production rule. Its position in `Grammar::rules` is its permanent
/// rule number, referenced from the parsing table and derivation output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub left: char,
    pub right: Vec<char>,
}

impl Rule {
    /// Right-hand symbols with display-only delimiters removed.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.right
            .iter()
            .copied()
            .filter(|&c| !Grammar::is_delimiter(c))
    }

    /// A rule derives the empty string when the empty marker is its only
    /// non-delimiter symbol.
    pub fn is_empty_production(&self) -> bool {
        let mut symbols = self.symbols();
        symbols.next() == Some(EMPTY) && symbols.next().is_none()
    }

    /// Right-hand side as display text, delimiters kept, empty marker
    /// shown as epsilon.
    pub fn display_right(&self) -> String {
        self.right
            .iter()
            .map(|&c| {
                if c == EMPTY {
                    EPSILON.to_string()
                } else {
                    c.to_string()
                }
            })
            .collect()
    }
}

/// An analyzed grammar: the ordered rules plus every derived artifact,
/// computed eagerly at construction and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub rules: Vec<Rule>,
    /// Left-hand symbols in sorted order; fixes parsing-table row indices.
    pub non_terminals: Vec<char>,
    /// Right-hand terminals (empty marker excluded, end marker included)
    /// in sorted order; fixes parsing-table column indices.
    pub terminals: Vec<char>,
    pub first: BTreeMap<char, BTreeSet<char>>,
    pub follow: BTreeMap<char, BTreeSet<char>>,
    /// Rule-number sets indexed by (non-terminal row, terminal column).
    pub table: Vec<Vec<BTreeSet<usize>>>,
    rows: HashMap<char, usize>,
    cols: HashMap<char, usize>,
}

impl Grammar {
    /// Builds all derived sets and the parsing table. The rule vector must
    /// be non-empty; the first rule's left side is the start symbol.
    /// Degenerate grammars yield empty or multi-entry table cells rather
    /// than errors.
    pub fn new(rules: Vec<Rule>) -> Self {
        let non_terminals: Vec<char> = rules
            .iter()
            .map(|r| r.left)
            .collect::<BTreeSet<char>>()
            .into_iter()
            .collect();

        let mut terminal_set: BTreeSet<char> = rules
            .iter()
            .flat_map(|r| r.symbols())
            .filter(|&c| Self::is_terminal(c) && c != EMPTY)
            .collect();
        terminal_set.insert(END_MARK);
        let terminals: Vec<char> = terminal_set.into_iter().collect();

        let rows = non_terminals.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let cols = terminals.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        let first = Self::compute_first(&rules, &non_terminals);
        let follow = Self::compute_follow(&rules, &non_terminals, &first);

        let mut grammar = Self {
            rules,
            non_terminals,
            terminals,
            first,
            follow,
            table: Vec::new(),
            rows,
            cols,
        };
        grammar.table = grammar.build_table();
        grammar
    }

    pub fn start_symbol(&self) -> char {
        self.rules[0].left
    }

    pub fn is_terminal(symbol: char) -> bool {
        !symbol.is_uppercase()
    }

    pub fn is_delimiter(symbol: char) -> bool {
        DELIMITERS.contains(&symbol)
    }

    pub fn row_of(&self, non_terminal: char) -> Option<usize> {
        self.rows.get(&non_terminal).copied()
    }

    pub fn col_of(&self, terminal: char) -> Option<usize> {
        self.cols.get(&terminal).copied()
    }

    /// Rule numbers applicable with `non_terminal` on top of the parse
    /// stack and `terminal` as the next input symbol.
    pub fn cell(&self, non_terminal: char, terminal: char) -> Option<&BTreeSet<usize>> {
        Some(&self.table[self.row_of(non_terminal)?][self.col_of(terminal)?])
    }
}
