//! Look-ahead Lowering Utilities
//!
//! Forward scan that resolves a `thereBe{` block to the line carrying its
//! trailing condition.
//!
//! ```text
//! thereBe{            <- open (depth 1)
//!     repeatWhile(x){ <- depth 2
//!         x--;
//!     }               <- depth 1
//! }if(x == 0)         <- resolved: trailing condition at depth 1
//! ```
//!
//! A chained form is also resolved: a bare `}` bringing depth to 0,
//! immediately followed by `if(...)` or `else if(...)`.

use crate::detection::{is_block_close, is_chained_condition, is_trailing_condition};

/// Brace depth of the block being scanned; the opening brace is already
/// consumed when scanning starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceDepth(usize);

impl BraceDepth {
    pub fn opened() -> Self {
        BraceDepth(1)
    }

    pub fn open(&mut self) {
        self.0 += 1;
    }

    pub fn close(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    /// Inside the scanned block itself, not a nested one
    pub fn is_outermost(self) -> bool {
        self.0 == 1
    }

    pub fn is_closed(self) -> bool {
        self.0 == 0
    }
}

/// Find the index of the condition line that guards the block opened at
/// `open`, scanning no further than `end` (exclusive).
///
/// Returns `None` when the block is unterminated or closes without a
/// condition.
pub fn find_matching_condition<S: AsRef<str>>(lines: &[S], open: usize, end: usize) -> Option<usize> {
    let end = end.min(lines.len());
    let mut depth = BraceDepth::opened();

    for i in (open + 1)..end {
        let line = lines[i].as_ref();

        if is_trailing_condition(line) {
            if depth.is_outermost() {
                return Some(i);
            }
            // Closes a nested trailing-condition block
            depth.close();
        } else if is_block_close(line) {
            depth.close();
            if depth.is_closed() {
                let next = i + 1;
                let chained = next < end && is_chained_condition(lines[next].as_ref());
                return chained.then_some(next);
            }
        } else if line.ends_with('{') {
            depth.open();
        }
    }

    None
}
