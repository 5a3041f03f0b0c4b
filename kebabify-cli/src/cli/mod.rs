pub mod args;
pub mod types;

pub use args::Cli;
pub use types::{OutputArg, PolicyArg, PreviewArg};
