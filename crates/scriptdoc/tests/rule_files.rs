//! Integration tests for the rule and localisation file readers.

use scriptdoc::parser::{parse_localisation_entries, parse_rule_entries, split_list};

#[test]
fn rule_entries_keep_line_numbers() {
    let input = "owner: Owned by %s\n\n# comment\ntrigger: Trigger conditions:\n";
    let entries = parse_rule_entries(input);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key, "owner");
    assert_eq!(entries[0].value, "Owned by %s");
    assert_eq!(entries[1].line, 4);
    assert_eq!(entries[1].value, "Trigger conditions:");
}

#[test]
fn rule_entries_split_at_first_separator() {
    let entries = parse_rule_entries("has_opinion: Opinion of %s: %s");
    assert_eq!(entries[0].key, "has_opinion");
    assert_eq!(entries[0].value, "Opinion of %s: %s");
}

#[test]
fn lines_without_separator_are_skipped() {
    assert!(parse_rule_entries("no separator here\nkey:value").is_empty());
}

#[test]
fn localisation_entries() {
    let input = "\u{feff}l_english:\n PROV118:0 \"Roma\"\n big_festival: \"Big Festival\"\n";
    let entries = parse_localisation_entries(input);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key, "prov118");
    assert_eq!(entries[0].value, "Roma");
    assert_eq!(entries[0].line, 2);
    assert_eq!(entries[1].key, "big_festival");
    assert_eq!(entries[1].value, "Big Festival");
}

#[test]
fn localisation_value_keeps_inner_colons() {
    let entries = parse_localisation_entries(" event_desc:1 \"Note: read this\"");
    assert_eq!(entries[0].value, "Note: read this");
}

#[test]
fn list_values() {
    assert_eq!(split_list("name, duration"), ["name", "duration"]);
    assert_eq!(split_list(" a ,, b ,"), ["a", "b"]);
    assert!(split_list("").is_empty());
}
