//! Function Definition Translation
//!
//! Translates TinyPy function signatures and return statements to Python.
//!
//! TinyPy function syntax:
//! ```text
//! int add(int a, int b){
//!     ret a + b;
//! }
//! ```
//!
//! Python:
//! ```text
//! def add(a, b):
//!     return a + b
//! ```
//!
//! Types are erased; only parameter names survive.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::{RETURN_PREFIX, TYPE_ALTERNATION};

static FUNCTION_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{TYPE_ALTERNATION})\s+(\w+)\s*\((.*)\)\s*\{{$")).expect("valid regex")
});

static PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:(?:{TYPE_ALTERNATION})\s+)?(\w+)$")).expect("valid regex")
});

/// Parsed `<type> <name>(<params>){` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: String,
    pub params: Vec<String>,
}

impl FunctionSignature {
    pub fn to_python(&self) -> String {
        format!("def {}({}):", self.name, self.params.join(", "))
    }
}

/// Check if the whole line is a function signature opening a body
pub fn is_function_definition(line: &str) -> bool {
    FUNCTION_SIGNATURE.is_match(line)
}

pub fn parse_function_signature(line: &str) -> Option<FunctionSignature> {
    let caps = FUNCTION_SIGNATURE.captures(line)?;
    let name = caps[1].to_string();

    let params = caps[2]
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| match PARAMETER.captures(p) {
            Some(pc) => pc[1].to_string(),
            // Unrecognised parameter shape is kept whole
            None => p.to_string(),
        })
        .collect();

    Some(FunctionSignature { name, params })
}

/// Translate a function signature line to a `def` header
pub fn translate_function_def(line: &str) -> Option<String> {
    parse_function_signature(line).map(|sig| sig.to_python())
}

/// Translate `ret <expr>` to `return <expr>`.
///
/// The expression is carried over verbatim; operator rewriting happens
/// in the dispatcher.
pub fn translate_return(line: &str) -> Option<String> {
    line.strip_prefix(RETURN_PREFIX)
        .map(|expr| format!("return {}", expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_with_typed_params() {
        assert_eq!(
            translate_function_def("int add(int a, float b){"),
            Some("def add(a, b):".to_string())
        );
    }

    #[test]
    fn test_function_without_params() {
        assert_eq!(translate_function_def("dyn main(){"), Some("def main():".to_string()));
        assert_eq!(translate_function_def("int main( ) {"), Some("def main():".to_string()));
    }

    #[test]
    fn test_untyped_and_odd_params() {
        let sig = parse_function_signature("bool check(x, int y, a b c){").unwrap();
        assert_eq!(sig.params, vec!["x", "y", "a b c"]);
    }

    #[test]
    fn test_signature_must_span_whole_line() {
        assert!(!is_function_definition("int add(a, b){ ret a"));
        assert!(!is_function_definition("void add(a){"));
        assert!(is_function_definition("string greet(string who){"));
    }

    #[test]
    fn test_return() {
        assert_eq!(translate_return("ret a + b"), Some("return a + b".to_string()));
        assert_eq!(translate_return("retry()"), None);
    }
}
