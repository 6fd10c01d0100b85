//! Helper utility functions for the TinyPy transpiler
//!
//! Contains general-purpose utility functions used throughout the transpiler:
//! - Comment stripping
//! - Statement terminator removal
//! - Quote-aware top-level comma splitting
//! - Identifier validation

use crate::dialect::LINE_COMMENT;

/// Strip a `//` comment from a line, preserving string literals.
///
/// Both quote characters open a literal; a literal only closes on the
/// quote that opened it.
pub fn strip_inline_comment(line: &str) -> String {
    let mut result = String::new();
    let mut quote: Option<char> = None;
    let mut prev_char = ' ';
    let chars: Vec<char> = line.chars().collect();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        match quote {
            Some(q) if c == q && prev_char != '\\' => quote = None,
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' => break,
            _ => {}
        }

        result.push(c);
        prev_char = c;
        i += 1;
    }

    result.trim_end().to_string()
}

/// Normalise one physical line for classification: comment removed, trimmed.
///
/// A line that is only a comment normalises to the empty string.
pub fn clean_line(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.starts_with(LINE_COMMENT) {
        return String::new();
    }
    strip_inline_comment(trimmed).trim().to_string()
}

/// Drop a single trailing statement terminator.
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix(';').unwrap_or(line)
}

/// Split on commas that sit outside any quoted span.
///
/// Fragments are trimmed; empty and whitespace-only fragments are dropped.
/// Used by array initialisers and dictionary pair lists.
pub fn split_top_level(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in text.chars() {
        match quote {
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            Some(q) if c == q => {
                quote = None;
                current.push(c);
            }
            None if c == ',' => {
                push_fragment(&mut parts, &current);
                current.clear();
            }
            _ => current.push(c),
        }
    }
    push_fragment(&mut parts, &current);

    parts
}

fn push_fragment(parts: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        parts.push(fragment.to_string());
    }
}

/// Check that `s` is a bare identifier (letter or `_`, then word characters)
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Check whether `s` is wrapped in a matching pair of `"` or `'`
pub fn is_quoted(s: &str) -> bool {
    s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"')) || (s.starts_with('\'') && s.ends_with('\'')))
}
