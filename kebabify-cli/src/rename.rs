use anyhow::{bail, Context, Result};
use kebabify_core::{
    render_change_log, render_rename_map, rename_operation, BindingPolicy, Config, OutputFormat,
    OutputFormatter, Preview, RenameMap, RenameOptions,
};
use std::cell::Cell;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::cli::Cli;
use crate::discover::find_components_dir;

pub fn handle_rename(cli: &Cli, mut config: Config) -> Result<()> {
    let output: OutputFormat = cli.output.into();
    let root = resolve_root(cli.dir.as_deref(), output)?;
    apply_overrides(cli, &mut config);

    // JSON output carries the whole result, so nothing else goes to stdout
    let preview = if output == OutputFormat::Json {
        Preview::None
    } else {
        cli.preview.map_or_else(
            || Preview::from_str(&config.defaults.preview_format).unwrap_or(Preview::Table),
            Into::into,
        )
    };
    let use_color = if cli.no_color {
        Some(false)
    } else {
        config.defaults.use_color
    };

    let options = RenameOptions {
        dry_run: cli.dry_run,
        rename_files: cli.no_rename_files.then_some(false),
        rename_dirs: cli.no_rename_dirs.then_some(false),
    };

    let map_shown = Cell::new(false);
    let result = rename_operation(&root, &config, &options, |map| {
        show_rename_map(map, prompt_preview(preview, cli.yes), use_color);
        map_shown.set(true);
        confirm(cli.yes)
    })?;

    if output == OutputFormat::Json {
        println!("{}", result.format(output));
        return Ok(());
    }

    if !map_shown.get() && !result.rename_map.is_empty() {
        show_rename_map(&result.rename_map, preview, use_color);
    }
    if let Some(changes) = result.changes.as_ref().filter(|c| !c.is_empty()) {
        let rendered = render_change_log(changes, preview, use_color);
        if !rendered.is_empty() {
            println!("{rendered}");
        }
    }
    print!("{}", result.format(output));

    Ok(())
}

fn resolve_root(dir: Option<&Path>, output: OutputFormat) -> Result<PathBuf> {
    if let Some(dir) = dir {
        if !dir.is_dir() {
            bail!("Directory not found: {}", dir.display());
        }
        return Ok(dir.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let found = find_components_dir(&cwd)?;
    if output == OutputFormat::Summary {
        println!("Found components directory: {}", found.display());
    }
    Ok(found)
}

/// Layer command-line flags over the loaded config
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(policy) = cli.policy {
        config.classifier.policy = policy.into();
    }
    if cli.rewrite_bindings {
        config.rewrite.bindings = BindingPolicy::Rewrite;
    }
    config.scan.excludes.extend(cli.exclude.iter().cloned());
}

/// The list being confirmed is always shown before asking, even when the
/// preview is turned off.
fn prompt_preview(preview: Preview, yes: bool) -> Preview {
    if preview == Preview::None && !yes {
        Preview::Summary
    } else {
        preview
    }
}

fn show_rename_map(map: &RenameMap, preview: Preview, use_color: Option<bool>) {
    if preview == Preview::None {
        return;
    }
    println!("Found {} PascalCase imports to rename:", map.len());
    println!("{}", render_rename_map(map, preview, use_color));
}

fn confirm(yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !io::stdout().is_terminal() {
        bail!("Refusing to prompt for confirmation: stdout is not a terminal. Re-run with --yes to apply");
    }

    print!("Apply? [y/N]: ");
    io::stdout().flush()?;
    read_confirmation(&mut io::stdin().lock())
}

fn read_confirmation<R: BufRead>(reader: &mut R) -> Result<bool> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read confirmation")?;
    Ok(matches!(
        line.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
