use super::display_path;
use crate::process::{ChangeLog, RenameKind};
use crate::rename_map::RenameMap;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::{self, IsTerminal};

fn new_table(use_color: bool, headers: &[&str]) -> Table {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    // Force styling even in non-TTY environments when colors are explicitly requested
    if use_color {
        table.enforce_styling();
        table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(headers.to_vec());
    }

    table
}

/// Proposed renames, one row per map entry.
pub fn render_map_table(map: &RenameMap, use_color: bool) -> String {
    let mut table = new_table(use_color, &["Old", "New", "First seen in"]);

    for entry in map.iter() {
        let seen = entry
            .discovered_in
            .as_deref()
            .map(display_path)
            .unwrap_or_default();

        if use_color {
            table.add_row(vec![
                Cell::new(&entry.old).fg(Color::Red),
                Cell::new(&entry.new).fg(Color::Green),
                Cell::new(seen),
            ]);
        } else {
            table.add_row(vec![entry.old.as_str(), entry.new.as_str(), seen.as_str()]);
        }
    }

    table.to_string()
}

/// Rewritten files followed by renames.
pub fn render_table(log: &ChangeLog, use_color: bool) -> String {
    let mut table = new_table(use_color, &["Path", "Kind", "Details"]);

    for rewrite in &log.rewritten {
        let path = display_path(&rewrite.path);
        let details = format!("{} import path(s)", rewrite.replacements);
        if use_color {
            table.add_row(vec![
                Cell::new(path),
                Cell::new("Content").fg(Color::Green),
                Cell::new(details).fg(Color::Yellow),
            ]);
        } else {
            table.add_row(vec![path, "Content".to_string(), details]);
        }
    }

    for rename in &log.renames {
        let kind = match rename.kind {
            RenameKind::File => "File",
            RenameKind::Dir => "Dir",
        };
        let from = display_path(&rename.from);
        let to = format!("-> {}", display_path(&rename.to));
        if use_color {
            table.add_row(vec![
                Cell::new(from),
                Cell::new(kind).fg(Color::Blue),
                Cell::new(to),
            ]);
        } else {
            table.add_row(vec![from, kind.to_string(), to]);
        }
    }

    table.to_string()
}
