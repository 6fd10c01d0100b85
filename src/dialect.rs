//! Dialect Lexical Surface
//!
//! Fixed keyword spellings of the TinyPy dialect and the closed set of
//! type keywords. Every marker here is distinguishable from the others
//! by fixed-prefix matching.

/// Opens a trailing-condition block: `thereBe{ ... }if(cond)`
pub const CONDITIONAL_KEYWORD: &str = "thereBe";
/// Opens a default branch: `alas{ ... }`
pub const ELSE_KEYWORD: &str = "alas";
pub const BLOCK_CLOSE: &str = "}";

pub const CONSTANT_PREFIX: &str = "brick ";
pub const GLOBAL_PREFIX: &str = "universal ";
pub const RETURN_PREFIX: &str = "ret ";
pub const DISPLAY_KEYWORD: &str = "disp";
pub const DISPLAY_OPERATOR: &str = "<<";
pub const INPUT_KEYWORD: &str = "enter";

pub const LINE_COMMENT: &str = "//";

/// Regex alternation of every type keyword, for embedding in patterns.
pub const TYPE_ALTERNATION: &str = "int|bool|char|float|string|dyn";

/// Declared element/variable type.
///
/// Types are erased in the output; they only select default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKeyword {
    Int,
    Bool,
    Char,
    Float,
    Str,
    Dyn,
}

impl TypeKeyword {
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "int" => Some(TypeKeyword::Int),
            "bool" => Some(TypeKeyword::Bool),
            "char" => Some(TypeKeyword::Char),
            "float" => Some(TypeKeyword::Float),
            "string" => Some(TypeKeyword::Str),
            "dyn" => Some(TypeKeyword::Dyn),
            _ => None,
        }
    }

    /// Python literal used to fill an uninitialised sized array
    pub fn default_value(self) -> &'static str {
        match self {
            TypeKeyword::Int => "0",
            TypeKeyword::Float => "0.0",
            TypeKeyword::Bool => "False",
            TypeKeyword::Char => "''",
            TypeKeyword::Str => "\"\"",
            TypeKeyword::Dyn => "None",
        }
    }
}

/// Map a dialect boolean spelling (any case) to the Python literal.
pub fn python_bool(word: &str) -> Option<&'static str> {
    if word.eq_ignore_ascii_case("true") {
        Some("True")
    } else if word.eq_ignore_ascii_case("false") {
        Some("False")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_keyword_defaults() {
        assert_eq!(TypeKeyword::parse("int").map(TypeKeyword::default_value), Some("0"));
        assert_eq!(TypeKeyword::parse("string").map(TypeKeyword::default_value), Some("\"\""));
        assert_eq!(TypeKeyword::parse("char").map(TypeKeyword::default_value), Some("''"));
        assert_eq!(TypeKeyword::parse("dict"), None);
    }

    #[test]
    fn test_python_bool_is_case_insensitive() {
        assert_eq!(python_bool("TRUE"), Some("True"));
        assert_eq!(python_bool("False"), Some("False"));
        assert_eq!(python_bool("truely"), None);
    }
}
