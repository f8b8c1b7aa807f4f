//! Merges a block whose statement is spread over several child tokens.

use scriptdoc_semantics::{DURATION_SLOT, MODIFIER_NAME_SLOT, Operator, REST_OF_CAMPAIGN};

use super::tables::RuleTables;
use crate::types::{Diagnostics, Token, TokenId, TokenTree};

/// The single statement produced from a multi-token block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Merged {
    pub text: String,
    /// Raw value of the `name` slot, naming a modifier whose effects follow.
    pub modifier_name: Option<String>,
}

enum SlotMatch<'a> {
    Direct(&'a Token),
    Variation(&'a Token),
}

/// Collects the slot values of block `id` and formats its template.
///
/// Each slot takes the first child of that type, or the first child whose
/// type is a variation of it (contributing its label and its value).
pub(crate) fn merge_block(
    tables: &RuleTables,
    tree: &TokenTree,
    id: TokenId,
    inverted: bool,
    diagnostics: &mut Diagnostics,
) -> Merged {
    let block = tree.token(id);
    let kind = block.kind();
    let slots = tables.multi_token_slots(kind).unwrap_or_default();

    let mut values = Vec::new();
    let mut operator = block.operator();
    let mut inverted = inverted;
    let mut modifier_name = None;

    for slot in slots {
        let found = tree.children(id).iter().find_map(|&child| {
            let token = tree.token(child);
            if token.kind() == slot.as_str() {
                Some(SlotMatch::Direct(token))
            } else if tables.variation(token.kind()) == Some(slot.as_str()) {
                Some(SlotMatch::Variation(token))
            } else {
                None
            }
        });

        let matched = match found {
            Some(SlotMatch::Direct(token)) => {
                values.push(tables.localize_value(token));
                if slot == MODIFIER_NAME_SLOT {
                    modifier_name = token.value().map(str::to_string);
                }
                token
            }
            Some(SlotMatch::Variation(token)) => {
                values.push(tables.find_localisation(token.kind()));
                values.push(tables.localize_value(token));
                token
            }
            None => {
                let filler = if slot == DURATION_SLOT {
                    REST_OF_CAMPAIGN
                } else {
                    ""
                };
                values.push(filler.to_string());
                continue;
            }
        };

        if let Some(child_operator) = matched.operator().filter(|op| *op != Operator::Equal) {
            operator = Some(child_operator);
        }
        if matched.negated() {
            inverted = !inverted;
        }
    }

    let text = tables
        .format_statement(kind, operator, inverted, &values)
        .unwrap_or_else(|missing| {
            diagnostics.record(missing);
            let present: Vec<&str> = values
                .iter()
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .collect();
            format!("{kind}: {}", present.join(", "))
        });

    Merged {
        text,
        modifier_name,
    }
}
