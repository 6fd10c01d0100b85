//! Errors surfaced around the transpiler core.
//!
//! Transpiling text never fails; only reading the source and writing the
//! result can.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TranspileError {
    #[error("reading '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("writing '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, TranspileError>;
