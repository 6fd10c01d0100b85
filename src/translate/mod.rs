//! Translation Module
//!
//! Per-construct line translators. Each one is a pure function that takes a
//! trimmed, terminator-free line and returns the Python rewrite, or `None`
//! when the line does not belong to its construct family.

// Shared operator and literal rewriting
pub mod expression_translate;

// Definitions and declarations
pub mod function_def_translate;
pub mod datastructure_translate;
pub mod variable_translate;

// Control flow headers
pub mod loop_translate;

// Statements
pub mod io_translate;

// Re-exports for convenience
pub use expression_translate::{normalize_value, rewrite_operators, Value};
pub use function_def_translate::{
    is_function_definition, parse_function_signature, translate_function_def, translate_return,
    FunctionSignature,
};
pub use datastructure_translate::{translate_array, translate_dictionary};
pub use variable_translate::{
    translate_constant, translate_declaration, translate_global, translate_step,
};
pub use loop_translate::{
    translate_conditional_loop, translate_counting_loop, translate_dict_iteration_loop,
    translate_iteration_loop, Comparator,
};
pub use io_translate::{translate_display, translate_input, InputFormat};
