#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod case_model;
pub mod classifier;
pub mod config;
pub mod error;
pub mod operations;
pub mod output;
pub mod pattern;
pub mod preview;
pub mod process;
pub mod rename_map;
pub mod rewrite;
pub mod scanner;
pub mod specifier;
pub mod walk;

pub use case_model::{is_kebab, to_kebab};
pub use classifier::{Classifier, ClassifierConfig, ClassifierPolicy};
pub use config::Config;
pub use error::KebabifyError;
pub use operations::{discover_renames, rename_operation, RenameOptions};
pub use output::{KebabifyResult, Outcome, OutputFormat, OutputFormatter};
pub use preview::{render_change_log, render_rename_map, Preview};
pub use process::{process_tree, ChangeLog, PathRename, ProcessOptions, RenameKind};
pub use rename_map::{build_rename_map, build_rename_map_with_rules, RenameEntry, RenameMap};
pub use rewrite::{
    rewrite_content, rewrite_content_with_rules, rewrite_file, BindingPolicy, FileRewrite, Rewrite,
    RewriteOptions,
};
pub use scanner::{scan, scan_names, scan_with_rules, Identifier};
pub use specifier::SpecifierRules;
pub use walk::TreeFilter;
