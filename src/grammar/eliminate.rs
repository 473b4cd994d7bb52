use std::collections::{BTreeMap, BTreeSet};

use crate::grammar::{Production, Symbol};
use crate::Grammar;

impl Grammar {
    pub fn eliminate_epsilon(&self, nullable: &BTreeSet<char>) -> Grammar {
        let mut rules: BTreeMap<char, BTreeSet<Production>> = BTreeMap::new();

        for (&left, productions) in &self.rules {
            let mut new_productions = BTreeSet::new();
            for production in productions {
                let Production::Symbols(symbols) = production else {
                    continue;
                };

                let positions: Vec<usize> = symbols
                    .iter()
                    .enumerate()
                    .filter(|(_, symbol)| match symbol {
                        Symbol::NonTerminal(c) => nullable.contains(c),
                        Symbol::Terminal(_) => false,
                    })
                    .map(|(i, _)| i)
                    .collect();

                // every subset of the nullable occurrences can be deleted;
                // the empty subset keeps the production as it is
                for subset in 0..(1usize << positions.len()) {
                    let mut deleted = vec![false; symbols.len()];
                    for (bit, &position) in positions.iter().enumerate() {
                        deleted[position] = subset & (1 << bit) != 0;
                    }
                    let candidate: Vec<Symbol> = symbols
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| !deleted[i])
                        .map(|(_, &symbol)| symbol)
                        .collect();
                    if candidate.is_empty() {
                        continue;
                    }
                    new_productions.insert(Production::Symbols(candidate));
                }
            }
            rules.insert(left, new_productions);
        }

        if let Some(start) = self.start {
            if nullable.contains(&start) {
                rules.entry(start).or_default().insert(Production::Epsilon);
            }
        }

        Grammar {
            rules,
            start: self.start,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::grammar::Production;
    use crate::Grammar;

    fn eliminated(input: &str) -> Grammar {
        let g = Grammar::parse(input).unwrap();
        g.eliminate_epsilon(&g.nullable_set())
    }

    #[test]
    fn start_symbol_keeps_epsilon() {
        let g = eliminated("S → aSb | ε");
        assert_eq!(g.to_rule_output_vec().to_plaintext(), "S → aSb | ab | ε");
    }

    #[test]
    fn non_start_epsilon_discarded() {
        let g = eliminated("S → A\nA → BC\nB → b | ε\nC → c | ε");
        assert_eq!(
            g.to_rule_output_vec().to_plaintext(),
            "A → B | BC | C\nB → b\nC → c\nS → A | ε"
        );
    }

    #[test]
    fn grammar_without_nullables_unchanged() {
        let g = Grammar::parse("S → aSb | c").unwrap();
        assert_eq!(g.eliminate_epsilon(&g.nullable_set()), g);
    }

    #[test]
    fn elimination_is_deterministic() {
        let input = "S → AbA | ε\nA → a | ε";
        let first = eliminated(input);
        let second = eliminated(input);
        assert_eq!(first, second);
        assert_eq!(
            first.to_rule_output_vec().to_plaintext(),
            second.to_rule_output_vec().to_plaintext()
        );
    }

    #[test]
    fn elimination_is_idempotent() {
        let once = eliminated("S → aSb | ε");
        let twice = once.eliminate_epsilon(&once.nullable_set());
        assert_eq!(once, twice);
    }

    #[test]
    fn epsilon_only_on_start() {
        let g = eliminated("S → AB\nA → a | ε\nB → b | ε");
        for (&left, productions) in &g.rules {
            if Some(left) != g.start {
                assert!(!productions.contains(&Production::Epsilon));
            }
        }
        assert!(g.rules[&'S'].contains(&Production::Epsilon));
    }

    #[test]
    fn repeated_nullable_occurrences() {
        let g = eliminated("S → AaA\nA → ε");
        assert_eq!(
            g.to_rule_output_vec().to_plaintext(),
            "A →\nS → Aa | AaA | a | aA"
        );
    }

    #[test]
    fn solver_finds_nothing_after_elimination() {
        let g = eliminated("S → AaA\nA → ε");
        assert!(g.nullable_set().is_empty());
    }

    #[test]
    fn input_grammar_left_intact() {
        let g = Grammar::parse("S → aSb | ε").unwrap();
        let nullable = g.nullable_set();
        let _ = g.eliminate_epsilon(&nullable);
        assert!(g.rules[&'S'].contains(&Production::Epsilon));
        assert_eq!(g.nullable_set(), nullable);
    }
}
