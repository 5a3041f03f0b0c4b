use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Places a components directory usually lives, relative to the project root
const COMMON_PATHS: &[&str] = &[
    "app/components",
    "components",
    "src/components",
    "src/app/components",
];

/// Find the components directory under `base`. Every `<path>/ui` candidate
/// is tried before any bare `<path>`.
pub fn find_components_dir(base: &Path) -> Result<PathBuf> {
    let with_ui = COMMON_PATHS.iter().map(|p| base.join(p).join("ui"));
    let bare = COMMON_PATHS.iter().map(|p| base.join(p));

    for candidate in with_ui.chain(bare) {
        debug!(path = %candidate.display(), "probing for components directory");
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    bail!(
        "Could not find a components directory in common locations under {}. Please provide the path as an argument",
        base.display()
    )
}
