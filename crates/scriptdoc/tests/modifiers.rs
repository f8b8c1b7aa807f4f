//! Integration tests for modifier pre-expansion.

use scriptdoc::parser::parse_script;
use scriptdoc::{Diagnostics, RuleTables, expand_modifiers};

fn tables() -> RuleTables {
    RuleTables::builder()
        .templates([
            ("prestige", "%s prestige"),
            ("global_tax_modifier", "National tax modifier: %s%%"),
            ("stability_cost_modifier", "%s%% stability cost"),
            ("picture", ""),
        ])
        .build()
        .unwrap()
}

#[test]
fn every_top_level_block_is_a_modifier() {
    let source = "big_festival = {\n\
                  prestige = 2\n\
                  global_tax_modifier = 0.1\n\
                  }\n\
                  bad_harvest = {\n\
                  stability_cost_modifier = -0.25\n\
                  }";
    let tree = parse_script(source).unwrap();
    let mut diagnostics = Diagnostics::new();
    let modifiers = expand_modifiers(&tree, &tables(), &mut diagnostics);

    assert_eq!(modifiers.len(), 2);
    assert_eq!(
        modifiers["big_festival"],
        ["+2 prestige", "National tax modifier: 10%"]
    );
    assert_eq!(modifiers["bad_harvest"], ["-25% stability cost"]);
    assert!(diagnostics.is_empty());
}

#[test]
fn empty_effects_are_dropped() {
    let tree = parse_script("festival = { picture = festival_pic prestige = 1 }").unwrap();
    let mut diagnostics = Diagnostics::new();
    let modifiers = expand_modifiers(&tree, &tables(), &mut diagnostics);
    assert_eq!(modifiers["festival"], ["+1 prestige"]);
}

#[test]
fn effect_starting_with_a_digit_gets_a_sign() {
    let tables = RuleTables::builder()
        .templates([("free_leader_pool", "1 extra leader without upkeep")])
        .build()
        .unwrap();
    let tree = parse_script("reform = { free_leader_pool = 1 }").unwrap();
    let mut diagnostics = Diagnostics::new();
    let modifiers = expand_modifiers(&tree, &tables, &mut diagnostics);
    assert_eq!(modifiers["reform"], ["+1 extra leader without upkeep"]);
}

#[test]
fn unknown_effects_are_recorded() {
    let tree = parse_script("reform = { land_morale = 0.1 }").unwrap();
    let mut diagnostics = Diagnostics::new();
    let modifiers = expand_modifiers(&tree, &tables(), &mut diagnostics);
    assert_eq!(modifiers["reform"], ["land_morale: 0.1"]);
    assert!(diagnostics.contains("land_morale"));
}

#[test]
fn modifiers_attach_to_tables() {
    let tree = parse_script("Big_Festival = { prestige = 2 }").unwrap();
    let mut diagnostics = Diagnostics::new();
    let modifiers = expand_modifiers(&tree, &tables(), &mut diagnostics);
    let tables = tables().with_modifiers(modifiers);
    assert_eq!(tables.modifier_effects("BIG_FESTIVAL"), ["+2 prestige"]);
    assert!(tables.modifier_effects("unknown").is_empty());
}
