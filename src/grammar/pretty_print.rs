use std::collections::BTreeSet;

use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Grammar, Production, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct RuleOutput {
    pub left: char,
    pub rights: Vec<String>,
}

impl RuleOutput {
    pub fn to_plaintext(&self) -> String {
        if self.rights.is_empty() {
            return format!("{} →", self.left);
        }
        format!("{} → {}", self.left, self.rights.join(" | "))
    }

    pub fn to_latex(&self) -> String {
        let rights = self
            .rights
            .iter()
            .map(|right| escape::tex(right.as_str()).into_owned())
            .collect::<Vec<_>>()
            .join(" \\mid ");
        format!("{} \\rightarrow {}", self.left, rights).replace(EPSILON, "\\epsilon")
    }
}

#[derive(Debug, Serialize)]
pub struct RuleOutputVec {
    data: Vec<RuleOutput>,
}

impl RuleOutputVec {
    pub fn to_plaintext(&self) -> String {
        self.data
            .iter()
            .map(|rule| rule.to_plaintext())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        std::iter::once("\\[\\begin{array}{l}".to_string())
            .chain(self.data.iter().map(|rule| rule.to_latex()))
            .chain(std::iter::once("\\end{array}\\]".to_string()))
            .collect::<Vec<_>>()
            .join("\\\\\n")
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

impl Grammar {
    pub fn to_rule_output_vec(&self) -> RuleOutputVec {
        let mut data = Vec::new();
        for (&left, productions) in &self.rules {
            // set order lists ε last
            let rights = productions
                .iter()
                .map(|production| match production {
                    Production::Epsilon => EPSILON.to_string(),
                    Production::Symbols(symbols) => {
                        symbols.iter().map(|symbol| symbol.char()).collect()
                    }
                })
                .collect();
            data.push(RuleOutput { left, rights });
        }
        RuleOutputVec { data }
    }
}

#[derive(Debug, Serialize)]
pub struct NullableOutput {
    data: Vec<char>,
}

impl NullableOutput {
    pub fn from_set(nullable: &BTreeSet<char>) -> Self {
        Self {
            data: nullable.iter().copied().collect(),
        }
    }

    pub fn to_plaintext(&self) -> String {
        format!("{{{}}}", self.joined())
    }

    pub fn to_latex(&self) -> String {
        format!("$\\{{{}\\}}$", self.joined())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    fn joined(&self) -> String {
        self.data
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
