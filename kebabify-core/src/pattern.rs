use regex::Regex;
use std::sync::OnceLock;

/// Binding clause of an import/export statement: default binding,
/// `{ ... }` list, `* as X`, `*`, or a default binding followed by a list.
macro_rules! clause_pattern {
    () => {
        r"(?:[A-Za-z_$][\w$]*\s*,\s*)?(?:\{[^{}]*\}|\*\s*as\s+[A-Za-z_$][\w$]*|\*)|[A-Za-z_$][\w$]*"
    };
}

/// `import`/`export` statement with a binding clause and a `from` specifier.
///
/// Captures `kw`, `clause` and `spec` (the module path).
const STATEMENT_PATTERN: &str = concat!(
    r"\b(?P<kw>import|export)\s+(?:type\s+)?(?P<clause>",
    clause_pattern!(),
    r#")\s*from\s*['"](?P<spec>[^'"\r\n]*)['"]"#
);

/// Any quoted module specifier in an import/export position: after the
/// `from` of an import/export clause (`export * from` included), after a
/// bare `import` (side-effect import), or inside `import(...)`. A `from`
/// with no clause before it is prose, not a specifier. `lead` swallows the
/// character before the keyword so `x.import('y')` and `importFoo` never
/// match.
const SPECIFIER_PATTERN: &str = concat!(
    r"(?m)(?P<lead>^|[^.\w$])(?:(?:import|export)\s+(?:type\s+)?(?:",
    clause_pattern!(),
    r#")\s*from\s*|import\s*(?:\(\s*)?)['"](?P<spec>[^'"\r\n]*)['"]"#
);

const IDENTIFIER_PATTERN: &str = r"[A-Za-z_$][\w$]*";

static STATEMENT: OnceLock<Regex> = OnceLock::new();
static SPECIFIER: OnceLock<Regex> = OnceLock::new();
static IDENTIFIER: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern: {e}")))
}

pub fn statement_regex() -> &'static Regex {
    compiled(&STATEMENT, STATEMENT_PATTERN)
}

pub fn specifier_regex() -> &'static Regex {
    compiled(&SPECIFIER, SPECIFIER_PATTERN)
}

pub fn identifier_regex() -> &'static Regex {
    compiled(&IDENTIFIER, IDENTIFIER_PATTERN)
}

/// Split a path segment into its stem and the remainder starting at the
/// first dot: `Button.vue` -> (`Button`, `.vue`), `Button` -> (`Button`, ``).
pub fn split_stem(segment: &str) -> (&str, &str) {
    match segment.find('.') {
        Some(0) | None => (segment, ""),
        Some(pos) => segment.split_at(pos),
    }
}

/// Remove `//` line comments and `/* */` block comments.
///
/// Comment bytes are replaced with spaces and newlines are kept, so byte
/// offsets and line numbers in the result line up with the input. Comment
/// markers inside `'`, `"` and `` ` `` strings are ignored, as is a `//`
/// preceded by `:` (URL scheme). Single and double quoted strings end at a
/// newline even when unterminated, so a stray apostrophe in markup cannot
/// hide the rest of the file.
pub fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut in_block = false;
    let mut in_line = false;
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        let next = bytes.get(i + 1).copied();

        if in_block {
            if b == b'*' && next == Some(b'/') {
                out.extend_from_slice(b"  ");
                in_block = false;
                i += 2;
            } else {
                out.push(if b == b'\n' { b'\n' } else { b' ' });
                i += 1;
            }
            continue;
        }

        if in_line {
            if b == b'\n' {
                in_line = false;
                out.push(b'\n');
            } else {
                out.push(b' ');
            }
            i += 1;
            continue;
        }

        if let Some(q) = quote {
            if let Some(escaped) = next.filter(|&n| b == b'\\' && n != b'\n') {
                out.extend_from_slice(&[b, escaped]);
                i += 2;
                continue;
            }
            if b == q || (b == b'\n' && q != b'`') {
                quote = None;
            }
            out.push(b);
            i += 1;
            continue;
        }

        match b {
            b'\'' | b'"' | b'`' => quote = Some(b),
            b'/' if next == Some(b'*') => {
                out.extend_from_slice(b"  ");
                in_block = true;
                i += 2;
                continue;
            },
            b'/' if next == Some(b'/') => {
                let prev = i.checked_sub(1).map(|p| bytes[p]);
                if prev != Some(b':') {
                    in_line = true;
                    continue;
                }
            },
            _ => {},
        }

        out.push(b);
        i += 1;
    }

    // Only whole characters inside comments were blanked, so this is valid UTF-8
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
