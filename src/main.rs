use std::{fs, io::BufRead};

use ll1_parsing_helper::{Grammar, Validation};

fn print_help() {
    println!("Usage: ll1-parsing-helper outputs [options] [grammar file]");
    println!("outputs:");
    println!("  prod: Numbered production rules");
    println!("  sets: Alphabets, FIRST and FOLLOW sets");
    println!("  table: LL(1) parsing table");
    println!("  check: Validate input strings read from stdin");
    println!("options:");
    println!("  -h: Print this help");
    println!("  -l: Print in LaTeX format");
    println!("  -j: Print in JSON format");
}

enum OutputFormat {
    Plain,
    LaTeX,
    Json,
}

fn main() {
    let mut outputs: Vec<&str> = Vec::new();
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let mut i: usize = 0;
    while i < args.len() && ["prod", "sets", "table", "check"].contains(&args[i].as_str()) {
        outputs.push(args[i].as_str());
        i += 1;
    }

    let mut output_format = OutputFormat::Plain;

    while i < args.len() && ["-h", "--help", "-l", "-j"].contains(&args[i].as_str()) {
        if args[i] == "-h" || args[i] == "--help" {
            print_help();
            return;
        } else if args[i] == "-l" {
            output_format = OutputFormat::LaTeX;
        } else if args[i] == "-j" {
            output_format = OutputFormat::Json;
        }
        i += 1;
    }

    if i + 1 < args.len() || outputs.is_empty() {
        print_help();
        return;
    }

    let input: String = if i == args.len() {
        std::io::stdin()
            .lock()
            .lines()
            .map(|l| l.unwrap())
            .collect::<Vec<String>>()
            .join("\n")
    } else {
        fs::read_to_string(args[i].as_str()).expect("Failed to read file")
    };

    let g = Grammar::parse(&input).unwrap();

    for output in outputs {
        if output == "prod" {
            let t = g.to_rule_output_vec();
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::Json => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "sets" {
            let t = g.to_symbol_set_output_vec();
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::Json => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "table" {
            let t = g.to_parsing_table_output();
            println!(
                "{}",
                match output_format {
                    OutputFormat::Plain => t.to_plaintext(),
                    OutputFormat::LaTeX => t.to_latex(),
                    OutputFormat::Json => serde_json::to_string(&t).unwrap(),
                }
            );
        }
        if output == "check" {
            // inputs come from stdin, one string per line; pass the
            // grammar as a file argument when using this output
            run_check(&g, matches!(output_format, OutputFormat::Json));
        }
    }
}

fn run_check(grammar: &Grammar, json: bool) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        let result = grammar.validate(&line);
        if json {
            println!("{}", serde_json::to_string(&result).unwrap());
            continue;
        }
        match result {
            Validation::InvalidInput => println!("[{}] contains unknown symbols", line),
            Validation::Accepted { derivation } => {
                println!("[{}] accepted. Derivation: {}", line, derivation.join(" => "))
            }
            Validation::Rejected => println!("[{}] rejected", line),
        }
    }
}
