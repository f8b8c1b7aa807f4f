//! Line-oriented rule and localisation file parser.
//!
//! Rule files are lists of `key: value` lines. Lines without a `": "`
//! separator, blank lines and `#` comments carry no entry and are skipped.

use winnow::ascii::{digit0, space0};
use winnow::combinator::terminated;
use winnow::prelude::*;
use winnow::token::{rest, take_till, take_until};

/// One `key: value` line of a rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// 1-based line number in the source file.
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Parse every `key: value` line of a rule file.
///
/// # Example
///
/// ```
/// use scriptdoc::parser::parse_rule_entries;
///
/// let entries = parse_rule_entries("# comment\noption: name, title\n\nbroken line");
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].key, "option");
/// assert_eq!(entries[0].value, "name, title");
/// assert_eq!(entries[0].line, 2);
/// ```
pub fn parse_rule_entries(input: &str) -> Vec<RuleEntry> {
    entries(input, rule_line)
}

/// Parse a game localisation file (`key:0 "Text"` or `key: "Text"`).
///
/// Quotes around the text are removed; the language header (`l_english:`)
/// has no text and is skipped.
pub fn parse_localisation_entries(input: &str) -> Vec<RuleEntry> {
    entries(input.trim_start_matches('\u{feff}'), localisation_line)
        .into_iter()
        .filter(|entry| !entry.value.is_empty())
        .collect()
}

/// Split a `a, b, c` list value.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn entries(
    input: &str,
    mut line_parser: impl FnMut(&mut &str) -> ModalResult<(String, String)>,
) -> Vec<RuleEntry> {
    input
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let mut text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                return None;
            }
            let (key, value) = line_parser(&mut text).ok()?;
            Some(RuleEntry {
                line: index + 1,
                key,
                value,
            })
        })
        .collect()
}

/// Parse `key: value`.
fn rule_line(input: &mut &str) -> ModalResult<(String, String)> {
    let key = terminated(take_until(1.., ": "), ": ").parse_next(input)?;
    let value = rest.parse_next(input)?;
    Ok((key.trim().to_string(), value.trim().to_string()))
}

/// Parse `key:0 "value"`.
fn localisation_line(input: &mut &str) -> ModalResult<(String, String)> {
    let key = terminated(take_till(1.., ':'), ':').parse_next(input)?;
    (digit0, space0).void().parse_next(input)?;
    let value = rest.parse_next(input)?;
    Ok((
        key.trim().to_lowercase(),
        value.trim().trim_matches('"').to_string(),
    ))
}
