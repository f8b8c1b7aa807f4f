//! Integration tests for the first-pass script reader.

use scriptdoc::parser::normalize;

#[test]
fn braces_get_their_own_lines() {
    assert_eq!(
        normalize("a = { b = { c = d } }"),
        ["a = {", "b = {", "c = d", "}", "}"]
    );
}

#[test]
fn multi_line_blocks_are_kept() {
    let source = "country_event = {\n\tid = test.1\n\n\thidden = yes\n}\n";
    assert_eq!(
        normalize(source),
        ["country_event = {", "id = test.1", "hidden = yes", "}"]
    );
}

#[test]
fn opening_brace_on_next_line_joins_its_key() {
    assert_eq!(normalize("trigger =\n{\nowner = ROOT\n}"), [
        "trigger = {",
        "owner = ROOT",
        "}"
    ]);
}

#[test]
fn several_statements_on_one_line_are_split() {
    assert_eq!(normalize("x = 1 y = 2 z = yes"), ["x = 1", "y = 2", "z = yes"]);
    assert_eq!(
        normalize("is_year > 1500 num_of_cities < 5"),
        ["is_year > 1500", "num_of_cities < 5"]
    );
}

#[test]
fn comments_are_removed() {
    let source = "# header comment\nowner = ROOT # trailing\n   # indented";
    assert_eq!(normalize(source), ["owner = ROOT"]);
}

#[test]
fn quoted_values_are_not_split() {
    assert_eq!(
        normalize(r#"name = "A = B c = d" desc = "x""#),
        [r#"name = "A = B c = d""#, r#"desc = "x""#]
    );
}

#[test]
fn braces_inside_quotes_are_text() {
    assert_eq!(normalize(r#"name = "{weird}""#), [r#"name = "{weird}""#]);
}

#[test]
fn empty_source_has_no_lines() {
    assert!(normalize("").is_empty());
    assert!(normalize("\n\n  # only a comment\n").is_empty());
}
