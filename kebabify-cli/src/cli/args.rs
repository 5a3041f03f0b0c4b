use clap::Parser;
use std::path::PathBuf;

use super::types::{OutputArg, PolicyArg, PreviewArg};

/// Rename PascalCase UI component files to kebab-case and rewrite the
/// import paths that point at them
#[derive(Parser, Debug)]
#[command(name = "kebabify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Components directory. When omitted, app/components/ui,
    /// components/ui, src/components/ui and src/app/components/ui are
    /// tried, then the same paths without /ui.
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Apply without asking for confirmation
    #[arg(short = 'y', long = "yes", env = "KEBABIFY_YES")]
    pub yes: bool,

    /// Show what would change without touching any file
    #[arg(long)]
    pub dry_run: bool,

    /// Preview format (default from config, otherwise table)
    #[arg(long, value_enum)]
    pub preview: Option<PreviewArg>,

    /// Output format for the final result
    #[arg(long, value_enum, default_value_t = OutputArg::Summary)]
    pub output: OutputArg,

    /// Classification policy for component identifiers
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Also rename bound identifiers inside import/export clauses
    #[arg(long)]
    pub rewrite_bindings: bool,

    /// Rewrite import paths but leave file names alone
    #[arg(long)]
    pub no_rename_files: bool,

    /// Rewrite import paths but leave directory names alone
    #[arg(long)]
    pub no_rename_dirs: bool,

    /// Extra glob patterns to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Config file (defaults to .kebabify/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,
}
