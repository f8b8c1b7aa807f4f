//! Pre-expansion of modifier definitions.

use std::collections::BTreeMap;

use super::tables::RuleTables;
use crate::types::{Diagnostics, TokenTree};

/// Expands a tree of modifier definitions into name → effect lines.
///
/// Every top-level block is a modifier; each of its statements is localized
/// as an effect. Effects starting with a digit get an explicit `+`.
///
/// # Example
///
/// ```
/// use scriptdoc::{Diagnostics, RuleTables, expand_modifiers, parser};
///
/// let tables = RuleTables::builder()
///     .templates([("prestige", "%s prestige")])
///     .build()
///     .unwrap();
/// let tree = parser::parse_script("big_festival = { prestige = 2 }").unwrap();
/// let mut diagnostics = Diagnostics::new();
///
/// let modifiers = expand_modifiers(&tree, &tables, &mut diagnostics);
/// assert_eq!(modifiers["big_festival"], ["+2 prestige"]);
/// ```
pub fn expand_modifiers(
    tree: &TokenTree,
    tables: &RuleTables,
    diagnostics: &mut Diagnostics,
) -> BTreeMap<String, Vec<String>> {
    let mut modifiers = BTreeMap::new();
    for &block in tree.children(tree.root()) {
        let effects = tree
            .children(block)
            .iter()
            .map(|&effect| tables.localize(tree, effect, false, diagnostics))
            .filter(|text| !text.is_empty())
            .map(|text| {
                if text.starts_with(|c: char| c.is_ascii_digit()) {
                    format!("+{text}")
                } else {
                    text
                }
            })
            .collect();
        modifiers.insert(tree.token(block).kind().to_string(), effects);
    }
    modifiers
}
