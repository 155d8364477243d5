use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Grammar, EMPTY, EPSILON};

fn braces(items: Vec<String>) -> String {
    if items.is_empty() {
        "∅".to_string()
    } else {
        format!("{{{}}}", items.join(", "))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleOutput {
    index: usize,
    left: char,
    right: String,
}

#[derive(Debug, Serialize)]
pub struct RuleOutputVec {
    rules: Vec<RuleOutput>,
}

impl RuleOutputVec {
    pub fn to_plaintext(&self) -> String {
        self.rules
            .iter()
            .map(|r| format!("{}. {} -> {}", r.index, r.left, r.right))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{rcl}".to_string())
            .chain(self.rules.iter().map(|r| {
                format!(
                    "{} & \\rightarrow & {}",
                    escape::tex(r.left.to_string()),
                    escape::tex(r.right.as_str()).replace(EPSILON, "\\epsilon")
                )
            }))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<_>>()
            .join("\\\\\n")
    }
}

#[derive(Debug, Serialize)]
struct SymbolSetOutput {
    name: char,
    first: Vec<String>,
    follow: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SymbolSetOutputVec {
    non_terminals: Vec<char>,
    terminals: Vec<char>,
    data: Vec<SymbolSetOutput>,
}

impl SymbolSetOutputVec {
    pub fn to_plaintext(&self) -> String {
        let mut lines = vec![
            format!(
                "Non-terminals: {}",
                braces(self.non_terminals.iter().map(|c| c.to_string()).collect())
            ),
            format!(
                "Terminals: {}",
                braces(self.terminals.iter().map(|c| c.to_string()).collect())
            ),
            String::new(),
        ];
        for s in &self.data {
            lines.push(format!("FIRST({}) = {}", s.name, braces(s.first.clone())));
        }
        lines.push(String::new());
        for s in &self.data {
            lines.push(format!("FOLLOW({}) = {}", s.name, braces(s.follow.clone())));
        }
        lines.join("\n")
    }

    pub fn to_latex(&self) -> String {
        fn f(a: &[String]) -> String {
            a.iter()
                .map(|s| escape::tex(s.as_str()))
                .collect::<Vec<_>>()
                .join(r"\ ")
                .replace(EPSILON, r"$\epsilon$")
        }

        let content = self
            .data
            .iter()
            .map(|s| {
                format!(
                    "{} & {} & {}",
                    escape::tex(s.name.to_string()),
                    f(&s.first),
                    f(&s.follow)
                )
            })
            .collect::<Vec<_>>()
            .join("\\\\\n ");

        "\\begin{tabular}{c|c|c}\n".to_string()
            + "Symbol & First & Follow\\\\\\hline\n"
            + &content
            + "\\\\\n\\end{tabular}"
    }
}

#[derive(Debug, Serialize)]
struct ParsingTableRow {
    left: char,
    cells: Vec<Vec<usize>>,
}

#[derive(Debug, Serialize)]
pub struct ParsingTableOutput {
    terminals: Vec<char>,
    rows: Vec<ParsingTableRow>,
}

impl ParsingTableOutput {
    pub fn to_plaintext(&self) -> String {
        let header: Vec<String> = std::iter::once(String::new())
            .chain(self.terminals.iter().map(|t| t.to_string()))
            .collect();
        let mut output: Vec<Vec<String>> = vec![header];
        for row in &self.rows {
            output.push(
                std::iter::once(row.left.to_string())
                    .chain(row.cells.iter().map(|cell| {
                        cell.iter()
                            .map(|r| r.to_string())
                            .collect::<Vec<_>>()
                            .join(",")
                    }))
                    .collect(),
            );
        }

        let width: Vec<usize> = (0..output[0].len())
            .map(|j| output.iter().map(|line| line[j].len()).max().unwrap())
            .collect();

        output
            .iter()
            .map(|line| {
                line.iter()
                    .enumerate()
                    .map(|(i, s)| format!("{:>width$}", s, width = width[i]))
                    .collect::<Vec<_>>()
                    .join(" | ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        let mut header: Vec<String> = vec![format!(
            "\\[\\begin{{array}}{{c{}}}\n",
            "|l".repeat(self.terminals.len()),
        )];
        header.extend(
            self.terminals
                .iter()
                .map(|t| format!("\\text{{{}}}", escape::tex(t.to_string()))),
        );
        let header = header.join(" & ");

        let content = self
            .rows
            .iter()
            .map(|row| {
                std::iter::once(escape::tex(row.left.to_string()).to_string())
                    .chain(row.cells.iter().map(|cell| {
                        let entries = cell
                            .iter()
                            .map(|r| r.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        if cell.len() > 1 {
                            // multi-entry cell: the grammar is not LL(1) here
                            format!("{{\\color{{red}}{}}}", entries)
                        } else {
                            entries
                        }
                    }))
                    .collect::<Vec<_>>()
                    .join(" & ")
            })
            .collect::<Vec<_>>()
            .join("\\\\\n");

        header + "\\\\\\hline\n" + &content + "\n\\end{array}\\]"
    }
}

impl Grammar {
    pub fn to_rule_output_vec(&self) -> RuleOutputVec {
        RuleOutputVec {
            rules: self
                .rules
                .iter()
                .enumerate()
                .map(|(index, rule)| RuleOutput {
                    index,
                    left: rule.left,
                    right: rule.display_right(),
                })
                .collect(),
        }
    }

    pub fn to_symbol_set_output_vec(&self) -> SymbolSetOutputVec {
        let name = |&c: &char| {
            if c == EMPTY {
                EPSILON.to_string()
            } else {
                c.to_string()
            }
        };
        SymbolSetOutputVec {
            non_terminals: self.non_terminals.clone(),
            terminals: self.terminals.clone(),
            data: self
                .non_terminals
                .iter()
                .map(|&nt| SymbolSetOutput {
                    name: nt,
                    first: self.first[&nt].iter().map(name).collect(),
                    follow: self.follow[&nt].iter().map(name).collect(),
                })
                .collect(),
        }
    }

    pub fn to_parsing_table_output(&self) -> ParsingTableOutput {
        ParsingTableOutput {
            terminals: self.terminals.clone(),
            rows: self
                .non_terminals
                .iter()
                .enumerate()
                .map(|(i, &left)| ParsingTableRow {
                    left,
                    cells: self.table[i]
                        .iter()
                        .map(|cell| cell.iter().copied().collect())
                        .collect(),
                })
                .collect(),
        }
    }
}
