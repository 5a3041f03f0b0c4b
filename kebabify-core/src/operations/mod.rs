//! High-level operations that correspond to CLI commands
//!
//! These modules contain the orchestration for each kebabify operation,
//! separated from CLI concerns like argument parsing and output formatting.

pub mod rename;

pub use rename::{discover_renames, rename_operation, RenameOptions};
