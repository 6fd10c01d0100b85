//! Variable Translation
//!
//! Declarations, constants, globals and increment/decrement statements.
//!
//! ```text
//! int x = 5         →  x = 5
//! bool ok           →  ok = None
//! brick LIMIT = 10  →  LIMIT = 10
//! universal count   →  global count
//! x++ / x--         →  x += 1 / x -= 1
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::{python_bool, CONSTANT_PREFIX, GLOBAL_PREFIX, TYPE_ALTERNATION};
use crate::helpers::is_valid_identifier;

static VARIABLE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:{TYPE_ALTERNATION})\s+(\w+)(?:\s*=\s*(.+))?$")).expect("valid regex")
});

// Space-delimited so identifiers such as `istrue` are left alone
static SPACED_BOOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\s)(true|false)\b").expect("valid regex")
});

static GLOBAL_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:(?:{TYPE_ALTERNATION})\s+)?(\w+)(?:\s*=\s*(.+))?$")).expect("valid regex")
});

/// Normalise an initializer that is exactly a boolean literal; leave
/// anything else verbatim.
fn initializer_value(value: &str) -> String {
    let value = value.trim();
    python_bool(value).map(str::to_string).unwrap_or_else(|| value.to_string())
}

/// `<type> <name>[= <expr>]`
pub fn translate_declaration(line: &str) -> Option<String> {
    let caps = VARIABLE_DECL.captures(line)?;
    let name = &caps[1];
    let value = match caps.get(2) {
        Some(init) => initializer_value(init.as_str()),
        None => "None".to_string(),
    };
    Some(format!("{} = {}", name, value))
}

/// `brick <rest>`: prefix dropped, spaced booleans normalised
pub fn translate_constant(line: &str) -> Option<String> {
    let rest = line.strip_prefix(CONSTANT_PREFIX)?.trim_start();
    let rest = SPACED_BOOL.replace_all(rest, |caps: &regex::Captures| {
        let lit = if &caps[2] == "true" { "True" } else { "False" };
        format!("{}{}", &caps[1], lit)
    });
    Some(rest.into_owned())
}

/// `universal [<type>] <name>[= <expr>]`
///
/// Python binds globals with a `global` statement; an initializer becomes a
/// second statement on the same line.
pub fn translate_global(line: &str) -> Option<String> {
    let rest = line.strip_prefix(GLOBAL_PREFIX)?.trim();

    let Some(caps) = GLOBAL_DECL.captures(rest) else {
        return Some(format!("global {}", rest));
    };
    let name = &caps[1];
    match caps.get(2) {
        Some(init) => Some(format!("global {}; {} = {}", name, name, initializer_value(init.as_str()))),
        None => Some(format!("global {}", name)),
    }
}

/// `<name>++` / `<name>--`
pub fn translate_step(line: &str) -> Option<String> {
    if let Some(name) = line.strip_suffix("++") {
        if is_valid_identifier(name) {
            return Some(format!("{} += 1", name));
        }
    }
    if let Some(name) = line.strip_suffix("--") {
        if is_valid_identifier(name) {
            return Some(format!("{} -= 1", name));
        }
    }
    None
}
