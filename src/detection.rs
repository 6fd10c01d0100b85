//! Structural Detection
//!
//! Classifies a cleaned line by the role it plays in block structure, and
//! parses the condition carried by trailing-condition lines.
//!
//! ```text
//! thereBe{          ConditionalOpen
//!     disp << x;    Statement
//! }if(x==1)         StrayCondition (unless consumed by the conditional scan)
//! alas{             ElseOpen
//! int f(a){         FunctionOpen
//! for(v:vs){        BlockOpen
//! }                 BlockClose
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::dialect::{BLOCK_CLOSE, CONDITIONAL_KEYWORD, ELSE_KEYWORD};
use crate::helpers::strip_terminator;
use crate::translate::{is_function_definition, rewrite_operators};

static CONDITIONAL_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{CONDITIONAL_KEYWORD}\s*\{{$")).expect("valid regex")
});

static ELSE_OPEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{ELSE_KEYWORD}\s*\{{$")).expect("valid regex")
});

// `}if(` / `}else if(`
static TRAILING_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\}\s*(?:else\s+)?if\s*\(").expect("valid regex")
});

// `if(` / `else if(` on the line after a bare `}`
static CHAINED_CONDITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:else\s+)?if\s*\(").expect("valid regex")
});

static CONDITION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\}?\s*(else\s+if|if)\s*\((.+)\)$").expect("valid regex")
});

/// Structural role of one cleaned line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    Blank,
    ConditionalOpen,
    ElseOpen,
    FunctionOpen,
    /// Any other line ending in `{` (loop headers and the like)
    BlockOpen,
    BlockClose,
    /// Leftover condition marker not consumed by a conditional block
    StrayCondition,
    Statement,
}

/// Detect the structural shape of a cleaned (comment-free, trimmed) line.
///
/// Order mirrors block handling precedence: a line ending in `{` is a block
/// opener before it can be a leftover condition.
pub fn detect_shape(line: &str) -> LineShape {
    if line.is_empty() {
        LineShape::Blank
    } else if CONDITIONAL_OPEN.is_match(line) {
        LineShape::ConditionalOpen
    } else if ELSE_OPEN.is_match(line) {
        LineShape::ElseOpen
    } else if is_function_definition(line) {
        LineShape::FunctionOpen
    } else if line.ends_with('{') {
        LineShape::BlockOpen
    } else if is_block_close(line) {
        LineShape::BlockClose
    } else if is_trailing_condition(line) || is_chained_condition(line) {
        LineShape::StrayCondition
    } else {
        LineShape::Statement
    }
}

pub fn is_block_close(line: &str) -> bool {
    strip_terminator(line).trim_end() == BLOCK_CLOSE
}

pub fn is_trailing_condition(line: &str) -> bool {
    TRAILING_CONDITION.is_match(line)
}

pub fn is_chained_condition(line: &str) -> bool {
    CHAINED_CONDITION.is_match(line)
}

/// Branch keyword a resolved condition opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    If,
    ElseIf,
}

/// Resolved condition of a trailing-condition block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionHeader {
    pub branch: Branch,
    /// Python condition, operators already rewritten
    pub condition: String,
}

impl ConditionHeader {
    pub fn to_python(&self) -> String {
        let keyword = match self.branch {
            Branch::If => "if",
            Branch::ElseIf => "elif",
        };
        format!("{} {}:", keyword, self.condition)
    }
}

/// Parse `}if(c)`, `}else if(c)`, `if(c)` or `else if(c)`.
pub fn parse_condition_header(line: &str) -> Option<ConditionHeader> {
    let caps = CONDITION_HEADER.captures(strip_terminator(line).trim_end())?;
    let branch = if caps[1].starts_with("else") {
        Branch::ElseIf
    } else {
        Branch::If
    };
    Some(ConditionHeader {
        branch,
        condition: rewrite_operators(&caps[2]),
    })
}
