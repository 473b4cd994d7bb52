pub mod grammar;
mod errors;

use errors::Error;
use grammar::pretty_print::NullableOutput;
use std::io::Write;

pub use grammar::Grammar;

fn print_help() {
    println!("Usage: eliminate-epsilon [options] [grammar file]");
    println!("Reads a context-free grammar, one rule per line");
    println!("(A → aB | ε), and removes its ε-productions.");
    println!("Prompts for a file name when none is given.");
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
    let args = std::env::args().skip(1).collect::<Vec<String>>();

    let mut output_format = OutputFormat::Plain;
    let mut i: usize = 0;
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

    if i + 1 < args.len() {
        print_help();
        return;
    }

    let filename: String = if i < args.len() {
        args[i].clone()
    } else {
        print!("Grammar file: ");
        std::io::stdout().flush().unwrap();
        let mut line = String::new();
        std::io::stdin().read_line(&mut line).unwrap();
        line.trim().to_string()
    };

    let input = match std::fs::read_to_string(&filename) {
        Ok(input) => input,
        Err(_) => {
            eprintln!("{}", Error::Load(filename));
            std::process::exit(1);
        }
    };

    let g = match Grammar::parse(&input) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let nullable = g.nullable_set();
    let eliminated = g.eliminate_epsilon(&nullable).to_rule_output_vec();
    let original = g.to_rule_output_vec();
    let nullable = NullableOutput::from_set(&nullable);

    match output_format {
        OutputFormat::Plain => {
            println!("Original grammar:");
            println!("{}", original.to_plaintext());
            println!();
            println!("Nullable non-terminals: {}", nullable.to_plaintext());
            println!();
            println!("Grammar without ε-productions:");
            println!("{}", eliminated.to_plaintext());
        }
        OutputFormat::LaTeX => {
            println!("{}", original.to_latex());
            println!("{}", nullable.to_latex());
            println!("{}", eliminated.to_latex());
        }
        OutputFormat::Json => {
            println!(
                "{{\"original\":{},\"nullable\":{},\"eliminated\":{}}}",
                original.to_json(),
                nullable.to_json(),
                eliminated.to_json()
            );
        }
    }
}
