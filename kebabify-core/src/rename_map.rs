use crate::case_model::to_kebab;
use crate::classifier::Classifier;
use crate::error::Result;
use crate::scanner::scan_with_rules;
use crate::specifier::{SpecifierRules, DEFAULT_ALIASES};
use crate::walk::{list_dir, TreeFilter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One old -> new identifier pair and where it was first seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameEntry {
    pub old: String,
    pub new: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discovered_in: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

/// Project-wide mapping from old identifier to new identifier.
///
/// Entries are only ever added, and only by the builder; once a key exists
/// its entry is final. Iteration is ordered by old identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameMap {
    entries: BTreeMap<String, RenameEntry>,
}

impl RenameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map with explicit pairs, for callers that already know the renames.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (old, new) in pairs {
            let old = old.into();
            map.entries.entry(old.clone()).or_insert(RenameEntry {
                old,
                new: new.into(),
                discovered_in: None,
                offset: None,
            });
        }
        map
    }

    /// Insert `old -> to_kebab(old)` unless `old` is already a key.
    /// Returns whether an entry was added.
    fn discover(&mut self, old: &str, file: &Path, offset: usize) -> bool {
        if self.entries.contains_key(old) {
            return false;
        }
        self.entries.insert(
            old.to_string(),
            RenameEntry {
                old: old.to_string(),
                new: to_kebab(old),
                discovered_in: Some(file.to_path_buf()),
                offset: Some(offset),
            },
        );
        true
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries.get(old).map(|e| e.new.as_str())
    }

    pub fn contains(&self, old: &str) -> bool {
        self.entries.contains_key(old)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenameEntry> {
        self.entries.values()
    }
}

/// Walk `root` and collect every component identifier referenced from an
/// eligible file.
///
/// A directory's files are scanned in name order before its
/// subdirectories. Files that cannot be read are skipped; a directory that
/// cannot be listed fails the build.
pub fn build_rename_map(root: &Path, filter: &TreeFilter, classifier: &Classifier) -> Result<RenameMap> {
    let aliases: Vec<String> = DEFAULT_ALIASES.iter().map(|s| (*s).to_string()).collect();
    let rules = SpecifierRules::new(&aliases, filter.extensions());
    build_rename_map_with_rules(root, filter, classifier, &rules)
}

/// Same as [`build_rename_map`] with explicit specifier rules (aliases and
/// renamable extensions).
pub fn build_rename_map_with_rules(
    root: &Path,
    filter: &TreeFilter,
    classifier: &Classifier,
    rules: &SpecifierRules,
) -> Result<RenameMap> {
    let mut map = RenameMap::new();
    visit(root, root, filter, classifier, rules, &mut map)?;
    debug!(entries = map.len(), root = %root.display(), "rename map built");
    Ok(map)
}

fn visit(
    dir: &Path,
    root: &Path,
    filter: &TreeFilter,
    classifier: &Classifier,
    rules: &SpecifierRules,
    map: &mut RenameMap,
) -> Result<()> {
    let listing = list_dir(dir, root, filter)?;

    for file in listing.files.iter().filter(|f| filter.is_eligible(f)) {
        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping unreadable file");
                continue;
            },
        };

        for id in scan_with_rules(&content, classifier, rules) {
            if map.discover(&id.name, file, id.offset) {
                debug!(
                    old = %id.name,
                    new = map.get(&id.name).unwrap_or_default(),
                    file = %file.display(),
                    "found component to rename"
                );
            }
        }
    }

    for subdir in &listing.dirs {
        visit(subdir, root, filter, classifier, rules, map)?;
    }

    Ok(())
}
