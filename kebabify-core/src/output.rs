use crate::process::ChangeLog;
use crate::rename_map::RenameMap;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// No component references were found
    NothingToRename,
    /// The confirmation gate said no
    Cancelled,
    /// Changes were computed but not written
    DryRun,
    Applied,
}

/// Result of a kebabify run
#[derive(Debug, Serialize, Deserialize)]
pub struct KebabifyResult {
    pub root: PathBuf,
    pub outcome: Outcome,
    pub rename_map: RenameMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<ChangeLog>,
}

impl KebabifyResult {
    pub fn files_changed(&self) -> usize {
        self.changes.as_ref().map_or(0, ChangeLog::files_changed)
    }

    pub fn replacements(&self) -> usize {
        self.changes.as_ref().map_or(0, ChangeLog::replacements)
    }

    pub fn renames(&self) -> usize {
        self.changes.as_ref().map_or(0, |c| c.renames.len())
    }
}

pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for KebabifyResult {
    fn format_json(&self) -> String {
        let renames: Vec<_> = self
            .rename_map
            .iter()
            .map(|e| json!({ "old": e.old, "new": e.new, "discovered_in": e.discovered_in }))
            .collect();

        serde_json::to_string(&json!({
            "success": true,
            "operation": "kebabify",
            "root": self.root,
            "outcome": self.outcome,
            "summary": {
                "identifiers": self.rename_map.len(),
                "files_changed": self.files_changed(),
                "replacements": self.replacements(),
                "renames": self.renames(),
            },
            "rename_map": renames,
            "changes": self.changes,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        match self.outcome {
            Outcome::NothingToRename => "No PascalCase imports found to rename.\n".to_string(),
            Outcome::Cancelled => "Operation cancelled.\n".to_string(),
            Outcome::DryRun => {
                let mut output = format!(
                    "Dry run: would rewrite {} import paths across {} files\n",
                    self.replacements(),
                    self.files_changed()
                );
                if self.renames() > 0 {
                    writeln!(output, "Dry run: would rename {} items", self.renames()).unwrap();
                }
                output
            },
            Outcome::Applied => {
                let mut output = format!(
                    "✓ Rewrote {} import paths across {} files\n",
                    self.replacements(),
                    self.files_changed()
                );
                if self.renames() > 0 {
                    writeln!(output, "✓ Renamed {} items", self.renames()).unwrap();
                }
                output.push_str("All changes completed successfully!\n");
                output
            },
        }
    }
}
