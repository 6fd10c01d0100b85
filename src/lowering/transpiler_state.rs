//! Transpiler State Management
//!
//! Contains the `Emitter`, which owns the output buffer and the current
//! indentation level while the block tree is written out. Indentation only
//! changes through `indented`, which enters a level for the duration of a
//! closure and leaves it afterwards, so nested blocks cannot leak depth.

use tracing::trace;

use crate::line_dispatch::transpile_line;
use crate::lowering::block_lowering::Block;
use crate::options::TranspileOptions;

/// Output buffer plus indentation context
pub struct Emitter {
    lines: Vec<String>,
    depth: usize,
    indent_unit: String,
}

impl Emitter {
    pub fn new(options: &TranspileOptions) -> Self {
        Self {
            lines: Vec::new(),
            depth: 0,
            indent_unit: options.indent_unit(),
        }
    }

    /// Append `text` at the current depth; empty text emits nothing
    pub fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.lines.push(format!("{}{}", self.indent_unit.repeat(self.depth), text));
    }

    /// Run `f` one indentation level deeper
    pub fn indented<F: FnOnce(&mut Self)>(&mut self, f: F) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }

    pub fn emit_blocks(&mut self, blocks: &[Block<'_>]) {
        for block in blocks {
            self.emit_block(block);
        }
    }

    fn emit_block(&mut self, block: &Block<'_>) {
        match block {
            Block::Statement(line) => {
                let text = transpile_line(line);
                self.push(&text);
            }
            Block::Conditional { header, body } => {
                self.push(&header.to_python());
                self.emit_body(body);
            }
            Block::Else { body } => {
                self.push("else:");
                self.emit_body(body);
            }
            Block::Function { header, body } | Block::Compound { header, body } => {
                let text = transpile_line(header);
                self.push(&text);
                self.emit_body(body);
            }
        }
    }

    /// Emit a block body one level deeper; an empty body gets `pass`
    fn emit_body(&mut self, body: &[Block<'_>]) {
        self.indented(|emitter| {
            let before = emitter.lines.len();
            emitter.emit_blocks(body);
            if emitter.lines.len() == before {
                trace!(depth = emitter.depth, "empty block body, emitting pass");
                emitter.push("pass");
            }
        });
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lowering::block_lowering::parse_blocks;

    fn emit(lines: &[&str]) -> Vec<String> {
        let mut emitter = Emitter::new(&TranspileOptions::default());
        emitter.emit_blocks(&parse_blocks(lines));
        assert_eq!(emitter.depth, 0);
        emitter.finish()
    }

    #[test]
    fn test_indented_restores_depth() {
        let mut emitter = Emitter::new(&TranspileOptions::default());
        emitter.indented(|e| {
            e.indented(|inner| inner.push("deep"));
            e.push("mid");
        });
        emitter.push("top");
        assert_eq!(emitter.finish(), vec!["        deep", "    mid", "top"]);
    }

    #[test]
    fn test_conditional_emits_header_first() {
        assert_eq!(
            emit(&["thereBe{", "disp << x;", "}if(x==1)"]),
            vec!["if x == 1:", "    print(x)"]
        );
    }

    #[test]
    fn test_empty_body_gets_pass() {
        assert_eq!(emit(&["int noop(){", "}"]), vec!["def noop():", "    pass"]);
    }

    #[test]
    fn test_custom_indent_width() {
        let options = TranspileOptions { indent_width: 2, ..TranspileOptions::default() };
        let mut emitter = Emitter::new(&options);
        emitter.emit_blocks(&parse_blocks(&["for(v:vs){", "disp << v;", "}"]));
        assert_eq!(emitter.finish(), vec!["for v in vs:", "  print(v)"]);
    }
}
