use std::collections::BTreeSet;

use serde::Serialize;

/// Statement types that could not be resolved to a template or a name.
///
/// The set only ever grows. Insertion order is irrelevant, so sets produced
/// by separate files can be merged with [`Diagnostics::extend`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    unresolved: BTreeSet<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an unresolved statement type.
    pub fn record(&mut self, kind: impl Into<String>) {
        let kind = kind.into();
        if !self.unresolved.contains(&kind) {
            tracing::trace!(kind = %kind, "unresolved statement");
            self.unresolved.insert(kind);
        }
    }

    /// Merges every entry of `other` into this set.
    pub fn extend(&mut self, other: &Diagnostics) {
        self.unresolved.extend(other.unresolved.iter().cloned());
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.unresolved.contains(kind)
    }

    pub fn len(&self) -> usize {
        self.unresolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.unresolved.iter().map(String::as_str)
    }
}
