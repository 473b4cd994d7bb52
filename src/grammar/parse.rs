use crate::errors::{Error, Result};
use crate::grammar::{Production, Symbol, EPSILON};
use crate::Grammar;

impl Grammar {
    pub fn parse(input: &str) -> Result<Self> {
        let mut g = Self::new();

        for (i, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let syntax_error = || Error::Syntax {
                line: i + 1,
                text: line.to_string(),
            };

            let parts: Vec<&str> = line.split('→').collect();
            if parts.len() != 2 {
                return Err(syntax_error());
            }

            let mut left_chars = parts[0].trim().chars();
            let left = match (left_chars.next(), left_chars.next()) {
                (Some(c), None) if c.is_ascii_uppercase() => c,
                _ => return Err(syntax_error()),
            };

            let rights = parts[1].trim();
            if rights.is_empty() {
                return Err(syntax_error());
            }

            for alt in rights.split('|') {
                let alt: String = alt.chars().filter(|c| !c.is_whitespace()).collect();
                if alt.is_empty() {
                    return Err(syntax_error());
                }
                if alt.chars().eq([EPSILON]) {
                    g.add_production(left, Production::Epsilon);
                    continue;
                }

                let mut symbols = Vec::new();
                for c in alt.chars() {
                    if c == EPSILON {
                        // ε only stands alone, never inside a sequence
                        return Err(syntax_error());
                    }
                    match Symbol::classify(c) {
                        Some(symbol) => symbols.push(symbol),
                        None => {
                            return Err(Error::InvalidSymbol {
                                line: i + 1,
                                symbol: c,
                            })
                        }
                    }
                }

                for name in symbols.iter().filter_map(Symbol::non_terminal) {
                    g.add_non_terminal(name);
                }
                g.add_production(left, Production::Symbols(symbols));
            }
        }

        Ok(g)
    }
}
