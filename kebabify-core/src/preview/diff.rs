use super::display_path;
use crate::process::{ChangeLog, RenameKind};
use nu_ansi_term::Color as AnsiColor;
use similar::{ChangeTag, TextDiff};
use std::fmt::Write;

/// Unified diff of every rewritten file, followed by the renames.
pub fn render_diff(log: &ChangeLog, use_color: bool) -> String {
    let mut output = String::new();

    for rewrite in &log.rewritten {
        let path = display_path(&rewrite.path);
        let header = format!("--- {path}\n+++ {path}");
        if use_color {
            writeln!(output, "{}", AnsiColor::White.bold().paint(header)).unwrap();
        } else {
            writeln!(output, "{header}").unwrap();
        }

        let diff = TextDiff::from_lines(&rewrite.before, &rewrite.after);
        for group in diff.grouped_ops(1) {
            let (Some(first), Some(last)) = (group.first(), group.last()) else {
                continue;
            };
            let old_start = first.old_range().start + 1;
            let new_start = first.new_range().start + 1;
            let hunk = format!(
                "@@ -{},{} +{},{} @@",
                old_start,
                last.old_range().end + 1 - old_start,
                new_start,
                last.new_range().end + 1 - new_start,
            );
            if use_color {
                writeln!(output, "{}", AnsiColor::Blue.paint(hunk)).unwrap();
            } else {
                writeln!(output, "{hunk}").unwrap();
            }

            for op in &group {
                for change in diff.iter_changes(op) {
                    let sign = match change.tag() {
                        ChangeTag::Delete => "-",
                        ChangeTag::Insert => "+",
                        ChangeTag::Equal => " ",
                    };
                    let line = format!("{sign}{}", change.value().trim_end_matches('\n'));
                    let line = match (use_color, change.tag()) {
                        (true, ChangeTag::Delete) => AnsiColor::Red.paint(line).to_string(),
                        (true, ChangeTag::Insert) => AnsiColor::Green.paint(line).to_string(),
                        _ => line,
                    };
                    writeln!(output, "{line}").unwrap();
                }
            }
        }
        writeln!(output).unwrap();
    }

    for rename in &log.renames {
        let kind = match rename.kind {
            RenameKind::File => "file",
            RenameKind::Dir => "dir",
        };
        let line = format!(
            "rename {kind} {} -> {}",
            display_path(&rename.from),
            display_path(&rename.to)
        );
        if use_color {
            writeln!(output, "{}", AnsiColor::Yellow.paint(line)).unwrap();
        } else {
            writeln!(output, "{line}").unwrap();
        }
    }

    output
}
