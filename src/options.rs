//! Transpiler options

/// Knobs that shape the emitted Python without changing its meaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspileOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Append `if __name__ == "__main__": main()` when a top-level
    /// zero-parameter `main` is defined
    pub entry_guard: bool,
}

impl TranspileOptions {
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            entry_guard: true,
        }
    }
}
