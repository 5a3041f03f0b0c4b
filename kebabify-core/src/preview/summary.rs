use super::display_path;
use crate::process::{ChangeLog, RenameKind};
use crate::rename_map::RenameMap;
use std::fmt::Write;

/// `Old -> new` lines, one per map entry
pub fn render_map_summary(map: &RenameMap) -> String {
    let mut output = String::new();
    for entry in map.iter() {
        writeln!(output, "{} -> {}", entry.old, entry.new).unwrap();
    }
    output
}

/// Plain-text change summary
pub fn render_summary(log: &ChangeLog) -> String {
    let mut output = String::new();

    if log.dry_run {
        writeln!(output, "[DRY RUN]").unwrap();
    } else {
        writeln!(output, "[CHANGES]").unwrap();
    }
    writeln!(output, "Files updated: {}", log.files_changed()).unwrap();
    writeln!(output, "Import paths rewritten: {}", log.replacements()).unwrap();
    writeln!(output, "Paths renamed: {}", log.renames.len()).unwrap();

    if !log.rewritten.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[CONTENT]").unwrap();
        for rewrite in &log.rewritten {
            writeln!(
                output,
                "{}: {} replacements",
                display_path(&rewrite.path),
                rewrite.replacements
            )
            .unwrap();
        }
    }

    if !log.renames.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[PATHS]").unwrap();
        for rename in &log.renames {
            let kind = match rename.kind {
                RenameKind::File => "file",
                RenameKind::Dir => "dir",
            };
            writeln!(
                output,
                "{} -> {} ({kind})",
                display_path(&rename.from),
                display_path(&rename.to)
            )
            .unwrap();
        }
    }

    output
}
