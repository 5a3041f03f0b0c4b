mod diff;
mod summary;
mod table;

pub use diff::render_diff;
pub use summary::{render_map_summary, render_summary};
pub use table::{render_map_table, render_table};

use crate::process::ChangeLog;
use crate::rename_map::RenameMap;
use std::io::{self, IsTerminal};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    Table,
    Diff,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "diff" => Ok(Self::Diff),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal detection
pub fn should_use_color_with_detector<F>(use_color: Option<bool>, is_terminal: F) -> bool
where
    F: Fn() -> bool,
{
    match use_color {
        Some(explicit_color) => explicit_color,
        None => is_terminal(),
    }
}

pub fn should_use_color(use_color: Option<bool>) -> bool {
    should_use_color_with_detector(use_color, || io::stdout().is_terminal())
}

/// Render the proposed renames. A map has no diff, so `Diff` falls back to
/// the summary listing.
pub fn render_rename_map(map: &RenameMap, format: Preview, use_color: Option<bool>) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_map_table(map, use_color),
        Preview::Diff | Preview::Summary => render_map_summary(map),
        Preview::None => String::new(),
    }
}

/// Render what the tree walk changed (or would change, for a dry run).
pub fn render_change_log(log: &ChangeLog, format: Preview, use_color: Option<bool>) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::Table => render_table(log, use_color),
        Preview::Diff => render_diff(log, use_color),
        Preview::Summary => render_summary(log),
        Preview::None => String::new(),
    }
}

/// Path relative to the working directory when possible
pub(crate) fn display_path(path: &Path) -> String {
    match std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok())
    {
        Some(relative_path) => relative_path.display().to_string(),
        None => path.display().to_string(),
    }
}
