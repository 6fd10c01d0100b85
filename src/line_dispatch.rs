//! Line Dispatcher
//!
//! Single per-line entry point. A line is classified once against an
//! ordered table of (construct, translator) pairs; the first translator
//! that accepts the line wins, and the operator rewriter is the
//! unconditional fallback.
//!
//! Table order is load-bearing:
//! - data structures before variables, so `int a[10]` is an array and not a
//!   malformed declaration
//! - loop headers before variables, so loop keywords are never read as
//!   declarations

use tracing::trace;

use crate::dialect::BLOCK_CLOSE;
use crate::helpers::{clean_line, strip_terminator};
use crate::translate::{
    rewrite_operators, translate_array, translate_conditional_loop, translate_constant,
    translate_counting_loop, translate_declaration, translate_dict_iteration_loop,
    translate_dictionary, translate_display, translate_function_def, translate_global,
    translate_input, translate_iteration_loop, translate_return, translate_step,
};

/// Construct family a single line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// Empty or comment-only
    Blank,
    /// Bare `}`
    BlockClose,
    FunctionDef,
    Return,
    Array,
    Dictionary,
    CountingLoop,
    ConditionalLoop,
    IterationLoop,
    DictIterationLoop,
    Declaration,
    Constant,
    Global,
    Step,
    Display,
    Input,
    /// Anything else; operator rewrite only
    Expression,
}

impl Construct {
    /// Whether the translator leaves operators for the fallback rewrite
    fn defers_operators(self) -> bool {
        matches!(self, Construct::Return)
    }
}

type Translator = fn(&str) -> Option<String>;

const CLASSIFIERS: &[(Construct, Translator)] = &[
    (Construct::FunctionDef, translate_function_def),
    (Construct::Return, translate_return),
    (Construct::Array, translate_array),
    (Construct::Dictionary, translate_dictionary),
    (Construct::CountingLoop, translate_counting_loop),
    (Construct::ConditionalLoop, translate_conditional_loop),
    (Construct::IterationLoop, translate_iteration_loop),
    (Construct::DictIterationLoop, translate_dict_iteration_loop),
    (Construct::Declaration, translate_declaration),
    (Construct::Constant, translate_constant),
    (Construct::Global, translate_global),
    (Construct::Step, translate_step),
    (Construct::Display, translate_display),
    (Construct::Input, translate_input),
];

/// Result of dispatching one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub construct: Construct,
    /// Python text without indentation; empty when nothing is emitted
    pub text: String,
}

/// Classify and rewrite one physical line.
pub fn dispatch(line: &str) -> Translated {
    let cleaned = clean_line(line);
    if cleaned.is_empty() {
        return Translated { construct: Construct::Blank, text: String::new() };
    }

    let stmt = strip_terminator(&cleaned).trim_end();
    if stmt == BLOCK_CLOSE {
        return Translated { construct: Construct::BlockClose, text: String::new() };
    }

    for (construct, translate) in CLASSIFIERS {
        if let Some(text) = translate(stmt) {
            trace!(?construct, line = stmt, "classified");
            let text = if construct.defers_operators() {
                rewrite_operators(&text)
            } else {
                text
            };
            return Translated { construct: *construct, text };
        }
    }

    Translated {
        construct: Construct::Expression,
        text: rewrite_operators(stmt),
    }
}

/// Rewrite one line to Python, without indentation.
pub fn transpile_line(line: &str) -> String {
    dispatch(line).text
}

pub fn classify_line(line: &str) -> Construct {
    dispatch(line).construct
}
