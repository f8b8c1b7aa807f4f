//! Integration tests for single-token localization.
//!
//! Tests cover template key composition, inverted wording, operator words and
//! the fallbacks used when no template exists.

use scriptdoc::parser::parse_script;
use scriptdoc::{Diagnostics, Operator, RuleTables, TokenId, TokenTree, ValueType};

fn tables() -> RuleTables {
    RuleTables::builder()
        .templates([
            ("owner", "Owned by %s"),
            ("controls", "Controls province %s"),
            ("controls_country", "Controls every province of %s"),
            ("owned_by", "Owned by %s"),
            ("religion", "Religion is %s"),
            ("religion_false", "Religion is not %s"),
            ("any_owned_province_religion", "Religion of any owned province is %s"),
            ("any_owned_province", "Any owned province:"),
            ("has_idea", "Has idea %s"),
            ("has_idea_false", "Does not have idea %s"),
            ("is_year", "Year is [OPERATOR] %s"),
            ("num_of_cities", "Number of cities is [OPERATOR] %s"),
            ("has_building", "Has building %s with level %s"),
        ])
        .operator_words([
            (Operator::Equal, "exactly"),
            (Operator::NotEqual, "not"),
            (Operator::More, "after"),
            (Operator::NotMore, "not after"),
            (Operator::Less, "before"),
            (Operator::NotLess, "not before"),
        ])
        .lookup_rules([
            ("controls", ValueType::Province),
            ("owned_by", ValueType::Country),
        ])
        .parent_exceptions([("any_owned_province", ["religion"])])
        .variations([("temple", "has_building")])
        .regions(["italy_region"])
        .localisation([
            ("prov118", "Roma"),
            ("state_5", "Lazio"),
            ("italy_region", "Italy"),
            ("FRA", "France"),
            ("catholic", "Catholic"),
            ("building_temple", "Temple"),
        ])
        .build()
        .unwrap()
}

/// Follows first children down to the deepest statement.
fn first_leaf(tree: &TokenTree) -> TokenId {
    let mut id = tree.root();
    while let Some(&child) = tree.children(id).first() {
        id = child;
    }
    id
}

fn localize_leaf(tables: &RuleTables, script: &str, inverted: bool) -> (String, Diagnostics) {
    let tree = parse_script(script).unwrap();
    let mut diagnostics = Diagnostics::new();
    let text = tables.localize(&tree, first_leaf(&tree), inverted, &mut diagnostics);
    (text, diagnostics)
}

fn localize_block(tables: &RuleTables, script: &str, inverted: bool) -> (String, Diagnostics) {
    let tree = parse_script(script).unwrap();
    let block = tree.children(tree.root())[0];
    let mut diagnostics = Diagnostics::new();
    let text = tables.localize(&tree, block, inverted, &mut diagnostics);
    (text, diagnostics)
}

// =============================================================================
// Template keys
// =============================================================================

#[test]
fn scope_value() {
    let (text, diagnostics) = localize_leaf(&tables(), "owner = ROOT", false);
    assert_eq!(text, "Owned by our country");
    assert!(diagnostics.is_empty());
}

#[test]
fn country_value_prefers_country_template() {
    let tables = tables();
    assert_eq!(
        localize_leaf(&tables, "controls = FRA", false).0,
        "Controls every province of France"
    );
    assert_eq!(
        localize_leaf(&tables, "controls = 118", false).0,
        "Controls province Roma"
    );
}

#[test]
fn country_value_without_country_template() {
    assert_eq!(
        localize_leaf(&tables(), "owned_by = FRA", false).0,
        "Owned by France"
    );
}

#[test]
fn parent_exception_renames_child() {
    let tables = tables();
    assert_eq!(
        localize_leaf(&tables, "any_owned_province = { religion = catholic }", false).0,
        "Religion of any owned province is Catholic"
    );
    assert_eq!(
        localize_leaf(&tables, "trigger = { religion = catholic }", false).0,
        "Religion is Catholic"
    );
}

#[test]
fn variation_renders_through_canonical_template() {
    assert_eq!(
        localize_leaf(&tables(), "temple = 2", false).0,
        "Has building Temple with level 2"
    );
}

// =============================================================================
// Inversion
// =============================================================================

#[test]
fn inverted_uses_false_template() {
    let tables = tables();
    assert_eq!(
        localize_leaf(&tables, "has_idea = quality", true).0,
        "Does not have idea quality"
    );
    assert_eq!(
        localize_leaf(&tables, "religion = catholic", true).0,
        "Religion is not Catholic"
    );
}

#[test]
fn operator_words() {
    let tables = tables();
    assert_eq!(localize_leaf(&tables, "is_year > 1500", false).0, "Year is after 1500");
    assert_eq!(localize_leaf(&tables, "is_year = 1500", false).0, "Year is exactly 1500");
    assert_eq!(localize_leaf(&tables, "is_year < 1500", false).0, "Year is before 1500");
}

#[test]
fn inverted_operator_is_negated() {
    let tables = tables();
    assert_eq!(
        localize_leaf(&tables, "is_year > 1500", true).0,
        "Year is not after 1500"
    );
    assert_eq!(
        localize_leaf(&tables, "is_year >= 1500", true).0,
        "Year is before 1500"
    );
    assert_eq!(localize_leaf(&tables, "is_year = 1500", true).0, "Year is not 1500");
}

#[test]
fn missing_operator_word_keeps_marker() {
    let tables = RuleTables::builder()
        .templates([("is_year", "Year is [OPERATOR] %s")])
        .build()
        .unwrap();
    assert_eq!(
        localize_leaf(&tables, "is_year > 1500", false).0,
        "Year is [OPERATOR] 1500"
    );
}

#[test]
fn inverted_section_header_without_false_template() {
    let (text, diagnostics) = localize_block(
        &tables(),
        "any_owned_province = { religion = catholic }",
        true,
    );
    assert_eq!(text, "Any owned province - none of the following:");
    assert!(diagnostics.is_empty());
}

#[test]
fn inverted_without_any_wording_is_unresolved() {
    let (text, diagnostics) = localize_leaf(&tables(), "controls = 118", true);
    assert_eq!(text, "controls: 118");
    assert!(diagnostics.contains("controls_false"));
}

#[test]
fn format_statement_reports_missing_key() {
    let tables = tables();
    assert_eq!(
        tables.format_statement("nothing", None, false, &[]),
        Err("nothing".to_string())
    );
    assert_eq!(
        tables.format_statement("OWNER", None, false, &["Spain".to_string()]),
        Ok("Owned by Spain".to_string())
    );
}

// =============================================================================
// Fallbacks
// =============================================================================

#[test]
fn province_scope_header() {
    let tables = tables();
    assert_eq!(
        localize_block(&tables, "118 = { owner = ROOT }", false).0,
        "Roma:"
    );
    assert_eq!(
        localize_block(&tables, "118 = { owner = ROOT }", true).0,
        "Roma - none of the following:"
    );
}

#[test]
fn state_region_and_country_scope_headers() {
    let tables = tables();
    assert_eq!(localize_block(&tables, "5 = { owner = ROOT }", false).0, "Lazio:");
    assert_eq!(
        localize_block(&tables, "italy_region = { owner = ROOT }", false).0,
        "Italy:"
    );
    assert_eq!(localize_block(&tables, "FRA = { owner = ROOT }", false).0, "France:");
    assert_eq!(
        localize_block(&tables, "ROOT = { owner = ROOT }", false).0,
        "our country:"
    );
}

#[test]
fn unknown_statement_falls_back_to_raw_text() {
    let tables = tables();
    let (text, diagnostics) = localize_leaf(&tables, "unknown_statement = 5", false);
    assert_eq!(text, "unknown_statement: 5");
    assert!(diagnostics.contains("unknown_statement"));

    let (text, diagnostics) = localize_block(&tables, "unknown_block = { owner = ROOT }", false);
    assert_eq!(text, "unknown_block");
    assert!(diagnostics.contains("unknown_block"));
}

#[test]
fn unknown_country_scope_is_unresolved() {
    let (text, diagnostics) = localize_block(&tables(), "ENG = { owner = ROOT }", false);
    assert_eq!(text, "eng");
    assert!(diagnostics.contains("eng"));
}
