//! Loop Header Translation
//!
//! Four loop flavours, each a single header line ending in `{`:
//!
//! ```text
//! repeatFor(int i=0;i<10;i++){    →  for i in range(0, 10):
//! repeatWhile(x<10 && ok){        →  while x<10 and ok:
//! for(item:items){                →  for item in items:
//! forDict(k,v:table){             →  for k, v in table.items():
//! ```
//!
//! The counting loop's range is derived from the comparator alone. `!=`
//! maps to an ascending range even when the loop counts down.

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::TYPE_ALTERNATION;
use crate::translate::expression_translate::rewrite_operators;

static COUNTING_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^repeatFor\s*\(\s*(?:(?:{TYPE_ALTERNATION})\s+)?(\w+)\s*=\s*([^;]+);\s*([^;]+);\s*\w+(?:\+\+|--)\s*\)\s*\{{$"
    ))
    .expect("valid regex")
});

// Two-character comparators first so `<=` is never read as `<` then `=...`
static LOOP_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*(<=|>=|!=|<|>)\s*(.+)$").expect("valid regex")
});

static CONDITIONAL_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^repeatWhile\s*\(\s*(.+)\s*\)\s*\{$").expect("valid regex")
});

static ITERATION_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^for\s*\(\s*(\w+)\s*:\s*(\w+)\s*\)\s*\{$").expect("valid regex")
});

static DICT_ITERATION_LOOP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^forDict\s*\(\s*(\w+)\s*,\s*(\w+)\s*:\s*(\w+)\s*\)\s*\{$").expect("valid regex")
});

/// Comparator of a counting loop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Less,
    LessEq,
    Greater,
    GreaterEq,
    NotEq,
}

impl Comparator {
    fn parse(op: &str) -> Option<Self> {
        match op {
            "<" => Some(Comparator::Less),
            "<=" => Some(Comparator::LessEq),
            ">" => Some(Comparator::Greater),
            ">=" => Some(Comparator::GreaterEq),
            "!=" => Some(Comparator::NotEq),
            _ => None,
        }
    }

    fn range_args(self, start: &str, limit: &str) -> String {
        match self {
            Comparator::Less | Comparator::NotEq => format!("{}, {}", start, limit),
            Comparator::LessEq => format!("{}, ({}) + 1", start, limit),
            Comparator::Greater => format!("{}, {}, -1", start, limit),
            Comparator::GreaterEq => format!("{}, ({}) - 1, -1", start, limit),
        }
    }
}

pub fn translate_counting_loop(line: &str) -> Option<String> {
    let caps = COUNTING_LOOP.captures(line)?;
    let var = &caps[1];
    let start = caps[2].trim();
    let condition = caps[3].trim();

    let args = LOOP_CONDITION
        .captures(condition)
        .and_then(|cc| {
            let cmp = Comparator::parse(&cc[2])?;
            Some(cmp.range_args(start, cc[3].trim()))
        })
        // Best effort: raw condition text as the upper bound
        .unwrap_or_else(|| format!("{}, {}", start, condition));

    Some(format!("for {} in range({}):", var, args))
}

pub fn translate_conditional_loop(line: &str) -> Option<String> {
    let caps = CONDITIONAL_LOOP.captures(line)?;
    Some(format!("while {}:", rewrite_operators(&caps[1])))
}

pub fn translate_iteration_loop(line: &str) -> Option<String> {
    let caps = ITERATION_LOOP.captures(line)?;
    Some(format!("for {} in {}:", &caps[1], &caps[2]))
}

pub fn translate_dict_iteration_loop(line: &str) -> Option<String> {
    let caps = DICT_ITERATION_LOOP.captures(line)?;
    Some(format!("for {}, {} in {}.items():", &caps[1], &caps[2], &caps[3]))
}
