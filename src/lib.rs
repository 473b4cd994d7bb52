extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

mod errors;
mod grammar;
pub use errors::Error;
pub use grammar::Grammar;

#[wasm_bindgen]
pub fn nullable_to_json(grammar: &str) -> String {
    match Grammar::parse(grammar) {
        Ok(g) => grammar::pretty_print::NullableOutput::from_set(&g.nullable_set()).to_json(),
        Err(e) => format!("{{\"error\":\"{}\"}}", e),
    }
}

#[wasm_bindgen]
pub fn eliminate_epsilon_to_json(grammar: &str) -> String {
    match Grammar::parse(grammar) {
        Ok(g) => {
            let nullable = g.nullable_set();
            g.eliminate_epsilon(&nullable).to_rule_output_vec().to_json()
        }
        Err(e) => format!("{{\"error\":\"{}\"}}", e),
    }
}


#[cfg(test)]
mod json_api_tests {
    #[test]
    fn eliminate_to_json() {
        assert_eq!(
            super::eliminate_epsilon_to_json("S → aSb | ε"),
            r#"{"data":[{"left":"S","rights":["aSb","ab","ε"]}]}"#
        );
    }

    #[test]
    fn nullable_to_json() {
        assert_eq!(super::nullable_to_json("S → A\nA → ε"), r#"{"data":["A","S"]}"#);
    }

    #[test]
    fn error_to_json() {
        assert_eq!(
            super::eliminate_epsilon_to_json("S a b"),
            "{\"error\":\"syntax error on line 1: 'S a b'\"}"
        );
    }
}
