//! Expression Translation
//!
//! Operator and literal rewriting shared by nearly every other translator,
//! plus the generic value normaliser used by array and dictionary
//! initialisers.
//!
//! Rewrites, applied in this order:
//! ```text
//! true / false   →  True / False      (whole words only)
//! &&             →  " and "
//! ||             →  " or "
//! !x             →  " not x"          (never touches !=)
//! !=             →  " != "
//! ==             →  " == "
//! ```
//! followed by whitespace collapsing and trimming.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::python_bool;
use crate::helpers::is_quoted;

static TRUE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\btrue\b").expect("valid regex"));
static FALSE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bfalse\b").expect("valid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Rewrite dialect operators and boolean literals to Python.
///
/// Pure and total. Applying it twice gives the same result as applying it
/// once, since no dialect operator token survives the first pass.
pub fn rewrite_operators(text: &str) -> String {
    let text = TRUE_WORD.replace_all(text, "True");
    let text = FALSE_WORD.replace_all(&text, "False");

    let text = text.replace("&&", " and ").replace("||", " or ");
    let text = rewrite_negation(&text);
    let text = text.replace("!=", " != ").replace("==", " == ");

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}

/// Every `!` that is followed by something other than `=` becomes ` not `,
/// including each `!` of a run such as `!!x`.
fn rewrite_negation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '!' && chars.peek().is_some_and(|&next| next != '=') {
            out.push_str(" not ");
        } else {
            out.push(c);
        }
    }
    out
}

/// Shape of a literal token in an initialiser list.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(&'static str),
    Str(String),
    Int(String),
    Float(String),
    /// Identifier or anything unrecognised; emitted verbatim
    Raw(String),
}

impl Value {
    pub fn classify(token: &str) -> Value {
        let token = token.trim();

        if let Some(lit) = python_bool(token) {
            return Value::Bool(lit);
        }
        if is_quoted(token) {
            return Value::Str(token.to_string());
        }

        let digits = token.strip_prefix('-').unwrap_or(token);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Value::Int(token.to_string());
        }
        if token.parse::<f64>().is_ok() {
            return Value::Float(token.to_string());
        }

        Value::Raw(token.to_string())
    }

    /// Python spelling of the value
    pub fn render(&self) -> &str {
        match self {
            Value::Bool(lit) => lit,
            Value::Str(s) | Value::Int(s) | Value::Float(s) | Value::Raw(s) => s,
        }
    }
}

/// Normalise one initialiser token to its Python spelling.
pub fn normalize_value(token: &str) -> String {
    Value::classify(token).render().to_string()
}
