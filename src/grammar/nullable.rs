use std::collections::BTreeSet;

use crate::grammar::{Production, Symbol};
use crate::Grammar;

impl Grammar {
    pub fn nullable_set(&self) -> BTreeSet<char> {
        let mut nullable: BTreeSet<char> = self
            .rules
            .iter()
            .filter(|(_, productions)| productions.contains(&Production::Epsilon))
            .map(|(&left, _)| left)
            .collect();

        let mut changed = true;
        while changed {
            changed = false;
            for (&left, productions) in &self.rules {
                if nullable.contains(&left) {
                    continue;
                }
                let derives_empty = productions.iter().any(|production| match production {
                    Production::Epsilon => true,
                    // a terminal anywhere rules the production out, no
                    // matter how many nullable non-terminals surround it
                    Production::Symbols(symbols) => symbols.iter().all(|symbol| match symbol {
                        Symbol::Terminal(_) => false,
                        Symbol::NonTerminal(c) => nullable.contains(c),
                    }),
                });
                if derives_empty {
                    nullable.insert(left);
                    changed = true;
                }
            }
        }

        nullable
    }
}

#[cfg(test)]
mod tests {
    use crate::Grammar;

    #[test]
    fn direct_epsilon() {
        let g = Grammar::parse("S → aSb | ε").unwrap();
        assert_eq!(g.nullable_set().into_iter().collect::<Vec<_>>(), vec!['S']);
    }

    #[test]
    fn transitive_nullable() {
        let g = Grammar::parse("A → BC\nB → b | ε\nC → c | ε").unwrap();
        assert_eq!(
            g.nullable_set().into_iter().collect::<Vec<_>>(),
            vec!['A', 'B', 'C']
        );
    }

    #[test]
    fn chain_of_nullables() {
        let g = Grammar::parse("S → A\nA → B\nB → ε").unwrap();
        assert_eq!(
            g.nullable_set().into_iter().collect::<Vec<_>>(),
            vec!['A', 'B', 'S']
        );
    }

    #[test]
    fn terminal_blocks_nullability() {
        let g = Grammar::parse("A → aB\nB → ε").unwrap();
        assert_eq!(g.nullable_set().into_iter().collect::<Vec<_>>(), vec!['B']);
    }

    #[test]
    fn no_nullable_symbols() {
        let g = Grammar::parse("S → aSb | c").unwrap();
        assert!(g.nullable_set().is_empty());
    }

    #[test]
    fn empty_grammar() {
        let g = Grammar::parse("  \n  ").unwrap();
        assert!(g.nullable_set().is_empty());
    }
}
