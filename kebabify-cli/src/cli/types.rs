use clap::ValueEnum;
use kebabify_core::{ClassifierPolicy, OutputFormat, Preview};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PreviewArg {
    Table,
    Diff,
    Summary,
    None,
}

impl From<PreviewArg> for Preview {
    fn from(arg: PreviewArg) -> Self {
        match arg {
            PreviewArg::Table => Self::Table,
            PreviewArg::Diff => Self::Diff,
            PreviewArg::Summary => Self::Summary,
            PreviewArg::None => Self::None,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputArg {
    #[default]
    Summary,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Summary => Self::Summary,
            OutputArg::Json => Self::Json,
        }
    }
}

/// Which identifiers count as components
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    /// Only known UI component families (Button, Dialog, ...)
    Allowlist,
    /// Any PascalCase identifier
    Structural,
}

impl From<PolicyArg> for ClassifierPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Allowlist => Self::Allowlist,
            PolicyArg::Structural => Self::Structural,
        }
    }
}
