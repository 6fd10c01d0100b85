//! I/O Statement Translation
//!
//! ```text
//! disp << "total:", sum;        →  print("total:", sum)
//! enter("%i", x);               →  x = int(input())
//! enter("%b", flags[k]);        →  flags[k] = input().lower() in ['true', '1']
//! ```
//!
//! Indexed input targets are not told apart as array or dictionary
//! elements; both emit the same subscript assignment.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::{DISPLAY_KEYWORD, DISPLAY_OPERATOR, INPUT_KEYWORD};

static DISPLAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^{DISPLAY_KEYWORD}\s*{}\s*(.*)$",
        regex::escape(DISPLAY_OPERATOR)
    ))
    .expect("valid regex")
});

// Quoted strings stay atomic; decimals before bare words so `3.5` is one token
static DISPLAY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"]*"|\d+\.\d+|\w+"#).expect("valid regex")
});

static INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r#"^{INPUT_KEYWORD}\(\s*"%(\w+)"\s*,\s*(\w+)(?:\[([^\]]+)\])?\s*\)$"#
    ))
    .expect("valid regex")
});

/// Input format code of an `enter(...)` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Int,
    Float,
    Bool,
    Char,
    Str,
    Dyn,
}

impl InputFormat {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "i" => Some(InputFormat::Int),
            "f" => Some(InputFormat::Float),
            "b" => Some(InputFormat::Bool),
            "c" => Some(InputFormat::Char),
            "s" => Some(InputFormat::Str),
            "dy" => Some(InputFormat::Dyn),
            _ => None,
        }
    }

    /// Python expression reading one value of this format
    pub fn read_expr(self) -> &'static str {
        match self {
            InputFormat::Int => "int(input())",
            InputFormat::Float => "float(input())",
            InputFormat::Bool => "input().lower() in ['true', '1']",
            InputFormat::Char => "input()[0]",
            InputFormat::Str | InputFormat::Dyn => "input()",
        }
    }
}

pub fn translate_display(line: &str) -> Option<String> {
    let caps = DISPLAY.captures(line)?;
    let tokens: Vec<&str> = DISPLAY_TOKEN
        .find_iter(&caps[1])
        .map(|m| m.as_str())
        .collect();

    if tokens.is_empty() {
        return None;
    }
    Some(format!("print({})", tokens.join(", ")))
}

pub fn translate_input(line: &str) -> Option<String> {
    let caps = INPUT.captures(line)?;
    let format = InputFormat::parse(&caps[1])?;

    let target = match caps.get(3) {
        Some(index) => format!("{}[{}]", &caps[2], index.as_str()),
        None => caps[2].to_string(),
    };

    Some(format!("{} = {}", target, format.read_expr()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate_io(line: &str) -> Option<String> {
        translate_display(line).or_else(|| translate_input(line))
    }

    #[test]
    fn test_display_mixed_tokens() {
        assert_eq!(
            translate_io(r#"disp << "total:", sum << 3.5"#),
            Some(r#"print("total:", sum, 3.5)"#.to_string())
        );
        assert_eq!(translate_io(r#"disp<<"a, b""#), Some(r#"print("a, b")"#.to_string()));
    }

    #[test]
    fn test_display_requires_insertion_operator() {
        assert_eq!(translate_io("display = 3"), None);
        assert_eq!(translate_io("disp <<"), None);
    }

    #[test]
    fn test_scalar_input() {
        assert_eq!(translate_io(r#"enter("%i", x)"#), Some("x = int(input())".to_string()));
        assert_eq!(translate_io(r#"enter("%f",y)"#), Some("y = float(input())".to_string()));
        assert_eq!(translate_io(r#"enter("%c", ch)"#), Some("ch = input()[0]".to_string()));
        assert_eq!(translate_io(r#"enter("%dy", v)"#), Some("v = input()".to_string()));
    }

    #[test]
    fn test_indexed_input() {
        assert_eq!(translate_io(r#"enter("%i", arr[0])"#), Some("arr[0] = int(input())".to_string()));
        assert_eq!(
            translate_io(r#"enter("%b", seen["key"])"#),
            Some(r#"seen["key"] = input().lower() in ['true', '1']"#.to_string())
        );
        assert_eq!(translate_io(r#"enter("%s", names[i + 1])"#), Some("names[i + 1] = input()".to_string()));
    }

    #[test]
    fn test_unknown_format_declines() {
        assert_eq!(translate_io(r#"enter("%q", x)"#), None);
    }
}
