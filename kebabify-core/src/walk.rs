use crate::error::{KebabifyError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_EXTENSIONS: &[&str] = &["vue", "ts"];
pub const DEFAULT_EXCLUDES: &[&str] = &["node_modules", ".git", "dist"];

/// Decides which files both tree walks look at.
#[derive(Debug, Clone)]
pub struct TreeFilter {
    extensions: Vec<String>,
    excludes: GlobSet,
}

impl Default for TreeFilter {
    fn default() -> Self {
        let excludes: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| (*s).to_string()).collect();
        let extensions: Vec<String> = DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect();
        // The built-in globs are plain names and always compile
        Self::new(&extensions, &excludes).unwrap_or(Self {
            extensions,
            excludes: GlobSet::empty(),
        })
    }
}

impl TreeFilter {
    /// `extensions` are given without the leading dot. `excludes` are glob
    /// patterns matched against entry names and root-relative paths.
    pub fn new(extensions: &[String], excludes: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in excludes {
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self {
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            excludes: builder.build()?,
        })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Eligible source file: extension is one of the configured ones.
    pub fn is_eligible(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    pub fn is_excluded(&self, path: &Path, root: &Path) -> bool {
        if path
            .file_name()
            .is_some_and(|name| self.excludes.is_match(Path::new(name)))
        {
            return true;
        }
        path.strip_prefix(root)
            .is_ok_and(|relative| self.excludes.is_match(relative))
    }
}

/// Immediate children of a directory, split into files and subdirectories,
/// each sorted by name. Excluded entries are dropped. Symlinks are neither.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

pub fn list_dir(dir: &Path, root: &Path, filter: &TreeFilter) -> Result<DirListing> {
    let mut listing = DirListing::default();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| KebabifyError::ReadDir {
            path: dir.to_path_buf(),
            source: walk_error_to_io(e),
        })?;

        let path = entry.path();
        if filter.is_excluded(path, root) {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_dir() {
            listing.dirs.push(path.to_path_buf());
        } else if file_type.is_file() {
            listing.files.push(path.to_path_buf());
        }
    }

    Ok(listing)
}

fn walk_error_to_io(err: walkdir::Error) -> io::Error {
    let message = err.to_string();
    err.into_io_error().unwrap_or_else(|| io::Error::other(message))
}
