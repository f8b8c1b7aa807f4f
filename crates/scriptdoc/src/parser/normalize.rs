//! First-pass reader: reduces raw script text to one statement per line.

use std::sync::LazyLock;
use std::{iter, mem};

use regex::Regex;

/// A statement boundary: the end of a value, whitespace, then `key =`.
static STATEMENT_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\w."](\s+)[\w.:@-]+\s*[=<>]"#).expect("statement boundary pattern is valid")
});

/// Normalize raw script text into statement lines.
///
/// - Comments (`#` outside quotes) are removed.
/// - Every `{` ends a line and every `}` stands on a line by itself.
/// - Several statements on one physical line are split apart.
/// - Blank lines are dropped.
///
/// # Example
///
/// ```
/// use scriptdoc::parser::normalize;
///
/// let lines = normalize("trigger = { owner = ROOT is_year > 1500 } # comment");
/// assert_eq!(lines, ["trigger = {", "owner = ROOT", "is_year > 1500", "}"]);
/// ```
pub fn normalize(source: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for raw in source.lines() {
        let code = strip_comment(raw.trim());
        for piece in split_braces(code) {
            for statement in split_statements(&piece) {
                push_statement(&mut lines, statement);
            }
        }
    }
    lines
}

/// Appends a statement, attaching a lone `{` to the key before it.
fn push_statement(lines: &mut Vec<String>, statement: &str) {
    let statement = statement.trim();
    if statement.is_empty() {
        return;
    }
    if statement == "{" {
        if let Some(previous) = lines.last_mut() {
            if !previous.ends_with('{') && previous != "}" {
                previous.push_str(" {");
                return;
            }
        }
    }
    lines.push(statement.to_string());
}

/// Cuts the line at the first `#` outside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (index, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..index],
            _ => {}
        }
    }
    line
}

/// Splits after every `{` and around every `}` outside quotes.
fn split_braces(line: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '{' if !in_quotes => {
                current.push(c);
                pieces.push(mem::take(&mut current));
            }
            '}' if !in_quotes => {
                pieces.push(mem::take(&mut current));
                pieces.push("}".to_string());
            }
            _ => current.push(c),
        }
    }
    pieces.push(current);
    pieces
}

/// Splits a piece that holds several `key = value` statements.
fn split_statements(piece: &str) -> Vec<&str> {
    let masked = mask_quoted(piece);
    let mut statements = Vec::new();
    let mut start = 0;
    for captures in STATEMENT_BOUNDARY.captures_iter(&masked) {
        let Some(gap) = captures.get(1) else {
            continue;
        };
        statements.push(&piece[start..gap.start()]);
        start = gap.end();
    }
    statements.push(&piece[start..]);
    statements
}

/// Replaces the contents of quoted strings with `_`, keeping byte offsets.
fn mask_quoted(piece: &str) -> String {
    let mut masked = String::with_capacity(piece.len());
    let mut in_quotes = false;
    for c in piece.chars() {
        if c == '"' {
            in_quotes = !in_quotes;
            masked.push(c);
        } else if in_quotes {
            masked.extend(iter::repeat_n('_', c.len_utf8()));
        } else {
            masked.push(c);
        }
    }
    masked
}
