use crate::error::{KebabifyError, Result};
use crate::pattern::split_stem;
use crate::rename_map::RenameMap;
use crate::rewrite::{rewrite_file, FileRewrite, RewriteOptions};
use crate::walk::{list_dir, TreeFilter};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenameKind {
    File,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRename {
    pub from: PathBuf,
    pub to: PathBuf,
    pub kind: RenameKind,
}

/// Everything the second walk changed, in the order it happened.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeLog {
    pub rewritten: Vec<FileRewrite>,
    pub renames: Vec<PathRename>,
    pub dry_run: bool,
}

impl ChangeLog {
    pub fn files_changed(&self) -> usize {
        self.rewritten.len()
    }

    pub fn replacements(&self) -> usize {
        self.rewritten.iter().map(|r| r.replacements).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rewritten.is_empty() && self.renames.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub rewrite: RewriteOptions,
    pub rename_files: bool,
    pub rename_dirs: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            rewrite: RewriteOptions::default(),
            rename_files: true,
            rename_dirs: true,
        }
    }
}

/// Rewrite imports in every eligible file under `root`, then rename files
/// and directories named after map keys.
///
/// Within a directory all files are rewritten before any of them is
/// renamed, and a subdirectory is renamed only after its own subtree has
/// been processed. `root` itself is never renamed.
pub fn process_tree(
    root: &Path,
    map: &RenameMap,
    filter: &TreeFilter,
    options: &ProcessOptions,
) -> Result<ChangeLog> {
    let mut log = ChangeLog {
        dry_run: options.rewrite.dry_run,
        ..ChangeLog::default()
    };
    process_dir(root, root, map, filter, options, &mut log)?;
    Ok(log)
}

fn process_dir(
    dir: &Path,
    root: &Path,
    map: &RenameMap,
    filter: &TreeFilter,
    options: &ProcessOptions,
    log: &mut ChangeLog,
) -> Result<()> {
    let listing = list_dir(dir, root, filter)?;
    let eligible: Vec<&PathBuf> = listing.files.iter().filter(|f| filter.is_eligible(f)).collect();

    for file in &eligible {
        if let Some(rewrite) = rewrite_file(file, map, &options.rewrite)? {
            log.rewritten.push(rewrite);
        }
    }

    if options.rename_files {
        for file in &eligible {
            if let Some(to) = renamed_path(file, map) {
                rename_path(file, &to, RenameKind::File, options.rewrite.dry_run, log)?;
            }
        }
    }

    for subdir in &listing.dirs {
        process_dir(subdir, root, map, filter, options, log)?;

        if options.rename_dirs {
            if let Some(to) = renamed_path(subdir, map) {
                rename_path(subdir, &to, RenameKind::Dir, options.rewrite.dry_run, log)?;
            }
        }
    }

    Ok(())
}

/// New path for an entry whose stem is a map key, keeping everything from
/// the first dot onwards.
fn renamed_path(path: &Path, map: &RenameMap) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let (stem, ext) = split_stem(name);
    let new = map.get(stem)?;
    Some(path.with_file_name(format!("{new}{ext}")))
}

fn rename_path(from: &Path, to: &Path, kind: RenameKind, dry_run: bool, log: &mut ChangeLog) -> Result<()> {
    if from == to {
        return Ok(());
    }

    let exact_exists = exact_entry_exists(to)?;
    if exact_exists {
        return Err(KebabifyError::RenameCollision {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
        });
    }

    if !dry_run {
        // `to` resolves to an entry without existing under its exact name:
        // a case-insensitive filesystem showing us `from` again
        let case_insensitive_alias = to.exists();
        if case_insensitive_alias {
            rename_via_temp(from, to)?;
        } else {
            fs::rename(from, to).map_err(|source| KebabifyError::Rename {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })?;
        }
        info!(from = %from.display(), to = %to.display(), "renamed");
    }

    log.renames.push(PathRename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        kind,
    });
    Ok(())
}

/// Two-step rename for case-only changes on case-insensitive filesystems.
fn rename_via_temp(from: &Path, to: &Path) -> Result<()> {
    let file_name = from
        .file_name()
        .map(OsStr::to_string_lossy)
        .unwrap_or_default();
    let temp = from.with_file_name(format!("{file_name}.{}.kebabify.tmp", std::process::id()));

    fs::rename(from, &temp).map_err(|source| KebabifyError::Rename {
        from: from.to_path_buf(),
        to: temp.clone(),
        source,
    })?;
    fs::rename(&temp, to).map_err(|source| KebabifyError::Rename {
        from: temp.clone(),
        to: to.to_path_buf(),
        source,
    })
}

/// Whether the parent directory lists an entry with exactly this name.
/// `Path::exists` alone cannot tell a real collision from a case-insensitive
/// match on the source itself.
fn exact_entry_exists(path: &Path) -> Result<bool> {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return Ok(false);
    };

    let entries = fs::read_dir(parent).map_err(|source| KebabifyError::ReadDir {
        path: parent.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| KebabifyError::ReadDir {
            path: parent.to_path_buf(),
            source,
        })?;
        if entry.file_name() == name {
            return Ok(true);
        }
    }
    Ok(false)
}
