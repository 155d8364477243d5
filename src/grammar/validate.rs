use serde::Serialize;

use super::{Grammar, EMPTY, END_MARK, EPSILON};

/// Hard cap on rule expansions per validation run. Exhausting it fails the
/// current branch, so pathological backtracking degrades to a rejection
/// instead of hanging.
const MAX_EXPANSIONS: usize = 100_000;

/// Outcome of validating one input string against a grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Validation {
    /// The input uses a symbol outside the terminal alphabet; detected
    /// before any stack simulation.
    InvalidInput,
    /// One sentential form per derivation step, starting with the start
    /// symbol.
    Accepted { derivation: Vec<String> },
    Rejected,
}

impl Validation {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted { .. })
    }
}

struct Validator<'a> {
    grammar: &'a Grammar,
    derivation: Vec<String>,
    budget: usize,
}

impl Grammar {
    /// Runs the table-driven pushdown simulation over `input`. The grammar
    /// is read-only here; every call owns its own stack and trace, so
    /// repeated calls yield identical results.
    pub fn validate(&self, input: &str) -> Validation {
        if input.chars().any(|c| !self.terminals.contains(&c)) {
            return Validation::InvalidInput;
        }

        let mut input: Vec<char> = input.chars().collect();
        input.push(END_MARK);
        let stack = vec![END_MARK, self.start_symbol()];

        let mut validator = Validator {
            grammar: self,
            derivation: vec![sentential_form(&input, 0, &stack)],
            budget: MAX_EXPANSIONS,
        };
        if validator.process(&input, 0, stack) {
            Validation::Accepted {
                derivation: validator.derivation,
            }
        } else {
            Validation::Rejected
        }
    }
}

impl Validator<'_> {
    fn process(&mut self, input: &[char], mut pos: usize, mut stack: Vec<char>) -> bool {
        while let Some(&top) = stack.last() {
            if pos >= input.len() {
                break;
            }
            if Grammar::is_delimiter(top) {
                stack.pop();
                continue;
            }
            if top == input[pos] {
                stack.pop();
                pos += 1;
                continue;
            }
            if Grammar::is_terminal(top) {
                return false;
            }

            let cell = match self.grammar.cell(top, input[pos]) {
                Some(cell) if !cell.is_empty() => cell,
                _ => return false,
            };
            stack.pop();

            if cell.len() == 1 {
                let index = *cell.iter().next().unwrap();
                if !self.expand(&mut stack, index) {
                    return false;
                }
                let form = sentential_form(input, pos, &stack);
                self.derivation.push(form);
                continue;
            }

            // conflict cell: try each candidate in rule order, first full
            // derivation wins; a failed branch leaves no trace behind
            for &index in cell {
                let mut fork = stack.clone();
                let mark = self.derivation.len();
                if !self.expand(&mut fork, index) {
                    return false;
                }
                let form = sentential_form(input, pos, &fork);
                self.derivation.push(form);
                if self.process(input, pos, fork) {
                    return true;
                }
                self.derivation.truncate(mark);
            }
            return false;
        }

        pos == input.len() && (stack.is_empty() || stack == [END_MARK])
    }

    /// Pops already happened; pushes the rule's right-hand side reversed so
    /// its leftmost symbol ends on top. The empty marker contributes
    /// nothing observable.
    fn expand(&mut self, stack: &mut Vec<char>, index: usize) -> bool {
        if self.budget == 0 {
            return false;
        }
        self.budget -= 1;
        for &symbol in self.grammar.rules[index].right.iter().rev() {
            if symbol != EMPTY {
                stack.push(symbol);
            }
        }
        true
    }
}

/// Sentential form at the current step: the consumed input prefix followed
/// by the stack read top to bottom, with the end marker and delimiters
/// dropped. An empty form renders as epsilon.
fn sentential_form(input: &[char], pos: usize, stack: &[char]) -> String {
    let consumed = input[..pos].iter().copied();
    let pending = stack.iter().rev().copied();
    let form: String = consumed
        .chain(pending)
        .filter(|&c| c != END_MARK && !Grammar::is_delimiter(c))
        .collect();
    if form.is_empty() {
        EPSILON.to_string()
    } else {
        form
    }
}
