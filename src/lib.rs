//! TinyPy - curly-brace scripting dialect to Python transpiler
//!
//! Textual, line-oriented translation: every physical line is classified
//! into a construct family and rewritten on its own, while a block
//! structuring pass turns brace nesting (including the dialect's
//! trailing-condition `thereBe{ ... }if(cond)` blocks) into Python
//! indentation.
//!
//! ## Pipeline
//!
//! ```text
//! source ─▶ clean lines ─▶ block tree ─▶ emitter ─▶ post-processing ─▶ Python
//!           (comments,     (lowering::   (per-line   (entry guard,
//!            trimming)      block_        dispatch,   joining)
//!                           lowering)     indent)
//! ```
//!
//! ```
//! let py = tinypy::transpile_source("thereBe{\n    disp << \"one\";\n}if(x==1)");
//! assert_eq!(py, "if x == 1:\n    print(\"one\")");
//! ```

// Core modules
pub mod dialect;
pub mod error;
pub mod options;
pub mod helpers;

// Construct classification and rewriting
pub mod translate;
pub mod line_dispatch;
pub mod detection;

// Block structuring and output
pub mod lowering;
pub mod postprocess_output;


pub use error::{Result, TranspileError};
pub use options::TranspileOptions;
pub use helpers::split_top_level;
pub use translate::rewrite_operators;
pub use line_dispatch::{classify_line, dispatch, transpile_line, Construct, Translated};
pub use lowering::{parse_blocks, Block};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use helpers::clean_line;
use lowering::Emitter;
use postprocess_output::apply_postprocessing;

//===========================================================================
// MAIN ENTRY POINTS
//===========================================================================

/// Transpile dialect source text to Python with default options.
pub fn transpile_source(source: &str) -> String {
    transpile_source_with(source, &TranspileOptions::default())
}

/// Transpile dialect source text to Python.
///
/// Lines are joined with `\n`; there is no trailing newline.
pub fn transpile_source_with(source: &str, options: &TranspileOptions) -> String {
    let lines: Vec<String> = source.lines().map(clean_line).collect();
    let blocks = parse_blocks(&lines);
    debug!(lines = lines.len(), blocks = blocks.len(), "block tree built");

    let mut emitter = Emitter::new(options);
    emitter.emit_blocks(&blocks);
    apply_postprocessing(emitter.finish(), options)
}

/// `foo/bar.tpy` → `foo/bar.py`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("py")
}

/// Read a whole source file.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| TranspileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Transpile `input` and write the result to `output`, or next to the
/// input with a `.py` extension. Returns the path written.
pub fn transpile_file(input: &Path, output: Option<&Path>, options: &TranspileOptions) -> Result<PathBuf> {
    let source = read_source(input)?;
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let mut python = transpile_source_with(&source, options);
    if !python.is_empty() {
        python.push('\n');
    }

    fs::write(&output_path, python).map_err(|source| TranspileError::Write {
        path: output_path.clone(),
        source,
    })?;

    info!(input = %input.display(), output = %output_path.display(), "transpiled");
    Ok(output_path)
}
