//! Block Lowering
//!
//! Recursive-descent parse of the cleaned line sequence into a block tree.
//! Finding a block's extent (and, for `thereBe{`, its trailing condition)
//! is done here; turning the tree into indented Python is left to the
//! emitter.
//!
//! Parsing and emission recurse once per nesting level. Sources nested a
//! few hundred levels deep are fine; thousands of levels exhaust the
//! thread stack (CPython's own parser rejects such input long before).
//!
//! ```text
//! int main(){                Function "int main(){"
//!     thereBe{                 Conditional (if x == 1)
//!         disp << x;             Statement
//!     }if(x==1)
//!     alas{                    Else
//!         x++;                   Statement
//!     }
//! }
//! ```

use tracing::{debug, trace};

use crate::detection::{detect_shape, parse_condition_header, ConditionHeader, LineShape};
use crate::lowering::lookahead_lowering::find_matching_condition;

/// One node of the block tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Single line, dispatched on its own
    Statement(&'a str),
    /// `thereBe{ body }if(cond)`, re-ordered so the condition leads
    Conditional {
        header: ConditionHeader,
        body: Vec<Block<'a>>,
    },
    /// `alas{ body }`
    Else { body: Vec<Block<'a>> },
    /// Function signature line and its body
    Function { header: &'a str, body: Vec<Block<'a>> },
    /// Loop header (or any other `{`-terminated line) and its body
    Compound { header: &'a str, body: Vec<Block<'a>> },
}

/// Parse cleaned lines into a block tree.
///
/// Malformed structure never fails: unresolved `thereBe{` markers, stray
/// `}` at top level and leftover condition markers are skipped.
pub fn parse_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<Block<'_>> {
    let lines: Vec<&str> = lines.iter().map(|l| l.as_ref()).collect();
    let parser = BlockParser { lines: &lines };
    let (blocks, _) = parser.parse_sequence(0, lines.len(), false);
    blocks
}

struct BlockParser<'s, 'a> {
    lines: &'s [&'a str],
}

impl<'s, 'a> BlockParser<'s, 'a> {
    /// Parse lines in `[start, end)`.
    ///
    /// With `closes_on_brace`, a bare `}` ends the sequence and the returned
    /// index is just past it; otherwise a bare `}` is ignored.
    fn parse_sequence(&self, start: usize, end: usize, closes_on_brace: bool) -> (Vec<Block<'a>>, usize) {
        let mut blocks = Vec::new();
        let mut i = start;

        while i < end {
            let line = self.lines[i];

            match detect_shape(line) {
                LineShape::Blank => i += 1,
                LineShape::ConditionalOpen => {
                    i = self.parse_conditional(i, end, &mut blocks);
                }
                LineShape::ElseOpen => {
                    let (body, next) = self.parse_sequence(i + 1, end, true);
                    blocks.push(Block::Else { body });
                    i = next;
                }
                LineShape::FunctionOpen => {
                    let (body, next) = self.parse_sequence(i + 1, end, true);
                    blocks.push(Block::Function { header: line, body });
                    i = next;
                }
                LineShape::BlockOpen => {
                    let (body, next) = self.parse_sequence(i + 1, end, true);
                    blocks.push(Block::Compound { header: line, body });
                    i = next;
                }
                LineShape::BlockClose => {
                    if closes_on_brace {
                        return (blocks, i + 1);
                    }
                    trace!(lineno = i + 1, "close marker outside a block ignored");
                    i += 1;
                }
                LineShape::StrayCondition => {
                    debug!(lineno = i + 1, marker = line, "leftover condition marker skipped");
                    i += 1;
                }
                LineShape::Statement => {
                    blocks.push(Block::Statement(line));
                    i += 1;
                }
            }
        }

        (blocks, end)
    }

    /// Resolve the `thereBe{` at `open`; returns the index to resume at.
    fn parse_conditional(&self, open: usize, end: usize, blocks: &mut Vec<Block<'a>>) -> usize {
        let resolved = find_matching_condition(self.lines, open, end).and_then(|cond_index| {
            parse_condition_header(self.lines[cond_index]).map(|header| (cond_index, header))
        });

        match resolved {
            Some((cond_index, header)) => {
                // Bare `}` lines inside the range belong to the block itself
                let (body, _) = self.parse_sequence(open + 1, cond_index, false);
                trace!(lineno = open + 1, condition = %header.condition, "conditional block resolved");
                blocks.push(Block::Conditional { header, body });
                cond_index + 1
            }
            None => {
                debug!(lineno = open + 1, "unresolved conditional block, marker skipped");
                open + 1
            }
        }
    }
}
