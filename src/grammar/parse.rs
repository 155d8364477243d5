use crate::Grammar;

use super::grammar::Rule;

impl Grammar {
    /// Parses rule text like `S -> aA | b`, one left side per line, with
    /// `|`-prefixed continuation lines. Alternatives get rule numbers in
    /// the order they appear; the first rule's left side becomes the start
    /// symbol.
    pub fn parse(grammar: &str) -> Result<Self, String> {
        let mut raw_rules: Vec<(char, &str)> = Vec::new();

        let mut previous_left: Option<char> = None;
        for (i, line) in grammar.lines().enumerate() {
            if line.chars().all(|c| c.is_whitespace()) {
                continue;
            }
            let parts: Vec<&str> = line.split("->").collect();
            if parts.len() > 2 {
                return Err(format!("Line {}: too many \"->\"", i + 1));
            }
            let (left, rights): (char, &str) = if parts.len() == 2 {
                let mut left_chars = parts[0].trim().chars();
                match (left_chars.next(), left_chars.next()) {
                    (Some(c), None) if !Self::is_terminal(c) => (c, parts[1]),
                    (Some(_), None) => {
                        return Err(format!(
                            "Line {}: left side must be an uppercase non-terminal",
                            i + 1
                        ))
                    }
                    _ => {
                        return Err(format!("Line {}: left side must be a single symbol", i + 1))
                    }
                }
            } else {
                match (previous_left, parts[0].trim_start().strip_prefix('|')) {
                    (Some(left), Some(rest)) => (left, rest),
                    (None, _) => return Err(format!("Line {}: cannot find left side", i + 1)),
                    _ => {
                        return Err(format!(
                            "Line {}: expected \"->\" or a \"|\" continuation",
                            i + 1
                        ))
                    }
                }
            };

            previous_left = Some(left);

            raw_rules.push((left, rights));
        }

        let mut rules: Vec<Rule> = Vec::new();
        for (left, rights) in raw_rules {
            for alternative in rights.split('|') {
                let right: Vec<char> = alternative.chars().filter(|c| !c.is_whitespace()).collect();
                if right.is_empty() {
                    return Err(format!("Rule for {}: empty right side", left));
                }
                rules.push(Rule { left, right });
            }
        }

        if rules.is_empty() {
            return Err("empty grammar".to_string());
        }

        for rule in &rules {
            if let Some(undefined) = rule
                .symbols()
                .find(|&c| !Self::is_terminal(c) && !rules.iter().any(|r| r.left == c))
            {
                return Err(format!("non-terminal {} has no productions", undefined));
            }
        }

        Ok(Self::new(rules))
    }
}
