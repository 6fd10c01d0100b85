//! Lowering Module
//!
//! Block structuring: look-ahead resolution of trailing conditions, the
//! block tree, and the emitter that turns the tree into indented Python.

// Look-ahead utilities
pub mod lookahead_lowering;

// Block tree
pub mod block_lowering;

// Emission state
pub mod transpiler_state;

// Re-exports for convenience
pub use lookahead_lowering::{find_matching_condition, BraceDepth};
pub use block_lowering::{parse_blocks, Block};
pub use transpiler_state::Emitter;
