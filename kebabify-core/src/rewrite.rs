use crate::error::{KebabifyError, Result};
use crate::pattern::{identifier_regex, specifier_regex, split_stem, statement_regex};
use crate::rename_map::RenameMap;
use crate::specifier::SpecifierRules;
use regex::Captures;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What to do with bound names in import/export clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingPolicy {
    /// Only module paths change; `import Button from` stays as is
    #[default]
    Preserve,
    /// Bound names that are map keys are renamed as well. Only useful for
    /// single-word names: `AlertDialog` becomes `alert-dialog`, which is
    /// not a valid JavaScript binding.
    Rewrite,
}

#[derive(Debug, Clone, Default)]
pub struct RewriteOptions {
    pub bindings: BindingPolicy,
    /// Compute the new content without writing it
    pub dry_run: bool,
    pub rules: SpecifierRules,
}

/// Result of rewriting a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub replacements: usize,
}

/// A file whose content was (or, in a dry run, would be) rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRewrite {
    pub path: PathBuf,
    pub replacements: usize,
    #[serde(skip)]
    pub before: String,
    #[serde(skip)]
    pub after: String,
}

/// Rewrite every module-path segment that names a map key.
///
/// A segment matches when its stem (text before the first `.`) equals a key
/// exactly, so `Accordion` never touches `AccordionTrigger` and the
/// extension is kept. Only local specifiers in `from '...'`, `import '...'`
/// and `import('...')` positions are considered, and a last segment whose
/// extension is not renamable (`Button.css`) is kept. Markup, package
/// imports and string literals elsewhere are left alone.
pub fn rewrite_content(text: &str, map: &RenameMap, bindings: BindingPolicy) -> Rewrite {
    rewrite_content_with_rules(text, map, bindings, &SpecifierRules::default())
}

pub fn rewrite_content_with_rules(
    text: &str,
    map: &RenameMap,
    bindings: BindingPolicy,
    rules: &SpecifierRules,
) -> Rewrite {
    let mut replacements = 0;

    let text = if bindings == BindingPolicy::Rewrite {
        statement_regex()
            .replace_all(text, |caps: &Captures| {
                if !rules.is_local(&caps["spec"]) {
                    return caps[0].to_string();
                }
                rewrite_clause(caps, map, &mut replacements)
            })
            .into_owned()
    } else {
        text.to_string()
    };

    let content = specifier_regex()
        .replace_all(&text, |caps: &Captures| {
            if !rules.is_local(&caps["spec"]) {
                return caps[0].to_string();
            }
            replace_group(caps, "spec", |spec| {
                rewrite_specifier(spec, map, rules, &mut replacements)
            })
        })
        .into_owned();

    Rewrite {
        content,
        replacements,
    }
}

/// Rebuild the whole match with one named group substituted.
fn replace_group(caps: &Captures, group: &str, f: impl FnOnce(&str) -> String) -> String {
    let whole = &caps[0];
    let (Some(all), Some(target)) = (caps.get(0), caps.name(group)) else {
        return whole.to_string();
    };
    let start = target.start() - all.start();
    let end = target.end() - all.start();
    format!("{}{}{}", &whole[..start], f(target.as_str()), &whole[end..])
}

fn rewrite_clause(caps: &Captures, map: &RenameMap, replacements: &mut usize) -> String {
    replace_group(caps, "clause", |clause| {
        identifier_regex()
            .replace_all(clause, |word: &Captures| match map.get(&word[0]) {
                Some(new) => {
                    *replacements += 1;
                    new.to_string()
                },
                None => word[0].to_string(),
            })
            .into_owned()
    })
}

pub fn rewrite_specifier(
    spec: &str,
    map: &RenameMap,
    rules: &SpecifierRules,
    replacements: &mut usize,
) -> String {
    let count = spec.split('/').count();
    spec.split('/')
        .enumerate()
        .map(|(index, segment)| {
            let renamed = rules
                .renamable(segment, index + 1 == count)
                .and_then(|(stem, ext)| map.get(stem).map(|new| format!("{new}{ext}")));
            match renamed {
                Some(new) => {
                    *replacements += 1;
                    new
                },
                None => segment.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Rewrite one file in place. Returns `None` when nothing changed, in which
/// case the file is not touched.
pub fn rewrite_file(path: &Path, map: &RenameMap, options: &RewriteOptions) -> Result<Option<FileRewrite>> {
    let before = fs::read_to_string(path).map_err(|source| KebabifyError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let rewrite = rewrite_content_with_rules(&before, map, options.bindings, &options.rules);
    if rewrite.content == before {
        return Ok(None);
    }

    if !options.dry_run {
        write_atomic(path, &rewrite.content).map_err(|source| KebabifyError::WriteFile {
            path: path.to_path_buf(),
            source,
        })?;
    }

    debug!(
        file = %path.display(),
        replacements = rewrite.replacements,
        dry_run = options.dry_run,
        "updated imports"
    );

    Ok(Some(FileRewrite {
        path: path.to_path_buf(),
        replacements: rewrite.replacements,
        before,
        after: rewrite.content,
    }))
}

/// Write through a temp file in the same directory, keeping the original
/// permissions, then rename it over `path`.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension(format!("{}.kebabify.tmp", std::process::id()));
    let permissions = fs::metadata(path)?.permissions();

    {
        let mut temp_file = File::create(&temp_path)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()?;
    }

    fs::set_permissions(&temp_path, permissions)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}
