//! Tree walk that turns a token tree into a document.
//!
//! The walk carries the nesting depth and an inherited inversion flag.
//! `not`/`nor` blocks toggle the inversion for their direct contents without
//! producing output or a level of nesting. Every other token consumes the
//! inherited inversion, so it applies exactly one level deep; a `no` value
//! flips the token's own inversion on top of that.

use scriptdoc_semantics::is_inversion;

use super::merge::merge_block;
use super::tables::RuleTables;
use crate::types::{Diagnostics, Document, TokenId, TokenTree};

/// How a token is rendered, chosen once per visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dispatch {
    Inversion,
    NamedBlock,
    MultiToken,
    Generic,
}

/// Renders `tree` into a document, recording unresolved statement types.
///
/// Rendering never fails and never modifies the tree: rendering the same
/// tree twice yields the same document.
pub fn render(tree: &TokenTree, tables: &RuleTables, diagnostics: &mut Diagnostics) -> Document {
    let mut renderer = Renderer {
        tree,
        tables,
        diagnostics,
        document: Document::new(),
        disabled: vec![false; tree.len()],
    };
    for &child in tree.children(tree.root()) {
        renderer.visit(child, 0, false);
    }
    tracing::debug!(
        tokens = tree.len(),
        lines = renderer.document.len(),
        "rendered script"
    );
    renderer.document
}

struct Renderer<'a> {
    tree: &'a TokenTree,
    tables: &'a RuleTables,
    diagnostics: &'a mut Diagnostics,
    document: Document,
    /// Tokens consumed as the name of their parent block.
    disabled: Vec<bool>,
}

impl Renderer<'_> {
    fn visit(&mut self, id: TokenId, depth: usize, inherited: bool) {
        if self.disabled[id.index()] {
            return;
        }
        let tree = self.tree;
        let token = tree.token(id);
        let has_children = tree.has_children(id);
        let dispatch = self.dispatch(token.kind(), has_children);

        if dispatch == Dispatch::Inversion {
            let toggled = !inherited;
            for &child in tree.children(id) {
                self.visit(child, depth, toggled);
            }
            return;
        }

        let inverted = inherited != token.negated();

        if depth == 0 {
            if !has_children {
                return;
            }
            // Top-level blocks are titled by name even when they also merge.
            let title = if self.tables.named_block(token.kind()).is_some() {
                self.resolve_name(id)
            } else {
                self.tables.localize(tree, id, inverted, self.diagnostics)
            };
            self.document.emit(depth, &title);
        } else if depth == 1 && !has_children {
            return;
        } else {
            match dispatch {
                Dispatch::MultiToken => {
                    self.merge(id, depth, inverted);
                    return;
                }
                Dispatch::NamedBlock => {
                    let name = self.resolve_name(id);
                    self.document.emit(depth, &name);
                }
                Dispatch::Inversion | Dispatch::Generic => {
                    let text = self.tables.localize(tree, id, inverted, self.diagnostics);
                    self.document.emit(depth, &text);
                }
            }
        }

        for &child in tree.children(id) {
            self.visit(child, depth + 1, false);
        }
    }

    fn dispatch(&self, kind: &str, has_children: bool) -> Dispatch {
        if is_inversion(kind) {
            Dispatch::Inversion
        } else if has_children && self.tables.multi_token_slots(kind).is_some() {
            Dispatch::MultiToken
        } else if has_children && self.tables.named_block(kind).is_some() {
            Dispatch::NamedBlock
        } else {
            Dispatch::Generic
        }
    }

    /// Finds the child naming block `id`, disables it and returns its
    /// localized value. Falls back to the block type.
    fn resolve_name(&mut self, id: TokenId) -> String {
        let (tree, tables) = (self.tree, self.tables);
        let kind = tree.token(id).kind();
        let candidates = tables.named_block(kind).unwrap_or_default();
        for candidate in candidates {
            let named_by = tree.children(id).iter().copied().find(|&child| {
                let token = tree.token(child);
                token.kind() == candidate.as_str() && token.value().is_some()
            });
            if let Some(child) = named_by {
                self.disabled[child.index()] = true;
                return tables.localize_value(tree.token(child));
            }
        }
        self.diagnostics.record(kind);
        kind.to_string()
    }

    fn merge(&mut self, id: TokenId, depth: usize, inverted: bool) {
        let merged = merge_block(self.tables, self.tree, id, inverted, self.diagnostics);
        self.document.emit(depth, &merged.text);
        if let Some(name) = merged.modifier_name {
            for effect in self.tables.modifier_effects(&name) {
                self.document.emit(depth + 1, effect);
            }
        }
    }
}
