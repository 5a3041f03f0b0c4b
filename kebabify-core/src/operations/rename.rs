use crate::config::Config;
use crate::output::{KebabifyResult, Outcome};
use crate::process::{process_tree, ProcessOptions};
use crate::rename_map::{build_rename_map_with_rules, RenameMap};
use crate::rewrite::RewriteOptions;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Per-run switches layered over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenameOptions {
    pub dry_run: bool,
    /// Overrides `rewrite.rename_files` when set
    pub rename_files: Option<bool>,
    /// Overrides `rewrite.rename_dirs` when set
    pub rename_dirs: Option<bool>,
}

/// Phase one only: scan `root` and return the proposed renames.
pub fn discover_renames(root: &Path, config: &Config) -> Result<RenameMap> {
    let filter = config.tree_filter().context("Invalid exclude pattern in config")?;
    let classifier = config.build_classifier();

    build_rename_map_with_rules(root, &filter, &classifier, &config.specifier_rules())
        .with_context(|| format!("Error building rename map for {}", root.display()))
}

/// Build the rename map, ask `confirm` whether to go ahead, then rewrite
/// imports and rename files under `root`.
///
/// `confirm` is not consulted for dry runs or when there is nothing to
/// rename.
pub fn rename_operation<F>(
    root: &Path,
    config: &Config,
    options: &RenameOptions,
    confirm: F,
) -> Result<KebabifyResult>
where
    F: FnOnce(&RenameMap) -> Result<bool>,
{
    let rename_map = discover_renames(root, config)?;

    if rename_map.is_empty() {
        return Ok(KebabifyResult {
            root: root.to_path_buf(),
            outcome: Outcome::NothingToRename,
            rename_map,
            changes: None,
        });
    }

    if !options.dry_run && !confirm(&rename_map)? {
        return Ok(KebabifyResult {
            root: root.to_path_buf(),
            outcome: Outcome::Cancelled,
            rename_map,
            changes: None,
        });
    }

    let filter = config.tree_filter()?;
    let process_options = ProcessOptions {
        rewrite: RewriteOptions {
            bindings: config.rewrite.bindings,
            dry_run: options.dry_run,
            rules: config.specifier_rules(),
        },
        rename_files: options.rename_files.unwrap_or(config.rewrite.rename_files),
        rename_dirs: options.rename_dirs.unwrap_or(config.rewrite.rename_dirs),
    };

    info!(
        root = %root.display(),
        identifiers = rename_map.len(),
        dry_run = options.dry_run,
        "processing files"
    );
    let changes = process_tree(root, &rename_map, &filter, &process_options)
        .with_context(|| format!("Error processing files under {}", root.display()))?;

    Ok(KebabifyResult {
        root: root.to_path_buf(),
        outcome: if options.dry_run {
            Outcome::DryRun
        } else {
            Outcome::Applied
        },
        rename_map,
        changes: Some(changes),
    })
}
