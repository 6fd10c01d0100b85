//! Output post-processing for the TinyPy transpiler
//!
//! Final steps applied to the emitted lines before they are returned:
//! the script entry-point guard, then joining.

use tracing::debug;

use crate::options::TranspileOptions;

const MAIN_DEFINITION: &str = "def main():";

/// Whether a top-level, zero-parameter `main` was emitted
pub fn defines_main(lines: &[String]) -> bool {
    lines.iter().any(|line| line == MAIN_DEFINITION)
}

/// Append the `__main__` guard so `main()` runs once, only when the file
/// is executed directly.
pub fn append_entry_guard(lines: &mut Vec<String>, indent_unit: &str) {
    lines.push(String::new());
    lines.push("if __name__ == \"__main__\":".to_string());
    lines.push(format!("{}main()", indent_unit));
}

/// Apply all post-processing to the emitted lines
pub fn apply_postprocessing(mut lines: Vec<String>, options: &TranspileOptions) -> String {
    if options.entry_guard && defines_main(&lines) {
        debug!("top-level main() found, appending entry guard");
        append_entry_guard(&mut lines, &options.indent_unit());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_guard_for_top_level_main() {
        let out = apply_postprocessing(lines(&["def main():", "    pass"]), &TranspileOptions::default());
        assert_eq!(out, "def main():\n    pass\n\nif __name__ == \"__main__\":\n    main()");
    }

    #[test]
    fn test_no_guard_without_main() {
        let out = apply_postprocessing(lines(&["def helper():", "    pass"]), &TranspileOptions::default());
        assert!(!out.contains("__main__"));
    }

    #[test]
    fn test_no_guard_for_nested_or_parameterised_main() {
        assert!(!defines_main(&lines(&["def outer():", "    def main():"])));
        assert!(!defines_main(&lines(&["def main(argv):"])));
    }

    #[test]
    fn test_guard_can_be_disabled() {
        let options = TranspileOptions { entry_guard: false, ..TranspileOptions::default() };
        let out = apply_postprocessing(lines(&["def main():", "    pass"]), &options);
        assert_eq!(out, "def main():\n    pass");
    }
}
