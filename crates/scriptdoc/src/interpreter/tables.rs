//! Immutable rule tables consumed by the renderer.

use std::collections::{BTreeMap, HashMap, HashSet};

use scriptdoc_semantics::{Operator, ValueType};

use crate::parser::{ParseError, Template, parse_template};

/// Every lookup table the renderer needs, loaded once per run.
///
/// Tables are built through [`RuleTables::builder`] (or
/// [`RuleTables::load`](crate::RuleTables::load)) and never change
/// afterwards, so a single value can be shared by reference across every
/// rendered file.
///
/// # Example
///
/// ```
/// use scriptdoc::{RuleTables, ValueType};
///
/// let tables = RuleTables::builder()
///     .templates([("is_year", "Year is [OPERATOR] %s")])
///     .lookup_rules([("owns", ValueType::Province)])
///     .build()
///     .unwrap();
///
/// assert!(tables.is_operator_aware("is_year"));
/// assert_eq!(tables.value_type("owns"), Some(ValueType::Province));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleTables {
    templates: BTreeMap<String, Template>,
    operator_aware: HashSet<String>,
    section_headers: HashSet<String>,
    operator_words: HashMap<Operator, String>,
    lookup_rules: HashMap<String, ValueType>,
    named_blocks: HashMap<String, Vec<String>>,
    multi_token: HashMap<String, Vec<String>>,
    parent_exceptions: HashMap<String, HashSet<String>>,
    variations: HashMap<String, String>,
    modifiers: BTreeMap<String, Vec<String>>,
    localisation: HashMap<String, String>,
    regions: HashSet<String>,
}

impl RuleTables {
    /// Starts an empty builder.
    pub fn builder() -> RuleTablesBuilder {
        RuleTablesBuilder::default()
    }

    /// Attaches pre-expanded modifier effects, consuming the tables.
    pub fn with_modifiers(mut self, modifiers: BTreeMap<String, Vec<String>>) -> Self {
        for (name, effects) in modifiers {
            self.modifiers.insert(name.to_lowercase(), effects);
        }
        self
    }

    /// The statement template registered under `key` (case-insensitive).
    pub fn template(&self, key: &str) -> Option<&Template> {
        self.templates.get(&key.to_lowercase())
    }

    pub fn has_template(&self, key: &str) -> bool {
        self.template(key).is_some()
    }

    /// Registered template keys, sorted.
    pub fn template_keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// True if the template of `key` contains the operator marker.
    pub fn is_operator_aware(&self, key: &str) -> bool {
        self.operator_aware.contains(&key.to_lowercase())
    }

    /// True if the template of `key` introduces a nested section.
    pub fn is_section_header(&self, key: &str) -> bool {
        self.section_headers.contains(&key.to_lowercase())
    }

    /// Localized phrase for an operator.
    pub fn operator_word(&self, operator: Operator) -> Option<&str> {
        self.operator_words.get(&operator).map(String::as_str)
    }

    /// Value type registered for a statement type.
    pub fn value_type(&self, kind: &str) -> Option<ValueType> {
        self.lookup_rules.get(kind).copied()
    }

    /// Ordered candidate child types naming a block, if it is a named block.
    pub fn named_block(&self, kind: &str) -> Option<&[String]> {
        self.named_blocks.get(kind).map(Vec::as_slice)
    }

    /// Ordered value slots of a multi-token expression.
    pub fn multi_token_slots(&self, kind: &str) -> Option<&[String]> {
        self.multi_token.get(kind).map(Vec::as_slice)
    }

    /// True if `child` is renamed to `<parent>_<child>` inside `parent`.
    pub fn is_parent_exception(&self, parent: &str, child: &str) -> bool {
        self.parent_exceptions
            .get(parent)
            .is_some_and(|children| children.contains(child))
    }

    /// Canonical statement name of a variation type.
    pub fn variation(&self, kind: &str) -> Option<&str> {
        self.variations.get(kind).map(String::as_str)
    }

    /// Pre-expanded effect lines of a modifier; empty when unknown.
    pub fn modifier_effects(&self, name: &str) -> &[String] {
        self.modifiers
            .get(&name.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Game localisation for `key` (case-insensitive).
    pub fn localisation(&self, key: &str) -> Option<&str> {
        self.localisation
            .get(&key.to_lowercase())
            .map(String::as_str)
    }

    pub fn is_region(&self, kind: &str) -> bool {
        self.regions.contains(kind)
    }

    /// Sizes of the main tables, for log summaries.
    pub(crate) fn summary(&self) -> TableSizes {
        TableSizes {
            templates: self.templates.len(),
            localisation: self.localisation.len(),
            variations: self.variations.len(),
            modifiers: self.modifiers.len(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableSizes {
    pub templates: usize,
    pub localisation: usize,
    pub variations: usize,
    pub modifiers: usize,
}

/// Builder for [`RuleTables`].
///
/// Each method may be called repeatedly; entries accumulate and later keys
/// replace earlier ones. Every key and statement type is lower-cased.
#[derive(Debug, Clone, Default)]
pub struct RuleTablesBuilder {
    raw_templates: Vec<(String, String)>,
    tables: RuleTables,
}

impl RuleTablesBuilder {
    /// Statement templates as written in rule files; parsed by [`build`](Self::build).
    pub fn templates<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.raw_templates
            .extend(entries.into_iter().map(|(key, value)| (key.into(), value.into())));
        self
    }

    /// Statement templates that are already parsed.
    pub fn parsed_templates<K>(mut self, entries: impl IntoIterator<Item = (K, Template)>) -> Self
    where
        K: Into<String>,
    {
        for (key, template) in entries {
            self.tables
                .templates
                .insert(key.into().to_lowercase(), template);
        }
        self
    }

    /// Operator name (`equal`, `notless`, ...) to localized phrase.
    pub fn operator_words<V>(mut self, entries: impl IntoIterator<Item = (Operator, V)>) -> Self
    where
        V: Into<String>,
    {
        for (operator, word) in entries {
            self.tables.operator_words.insert(operator, word.into());
        }
        self
    }

    /// Statement type to value type.
    pub fn lookup_rules<K>(mut self, entries: impl IntoIterator<Item = (K, ValueType)>) -> Self
    where
        K: Into<String>,
    {
        for (kind, value_type) in entries {
            self.tables.lookup_rules.insert(kind.into().to_lowercase(), value_type);
        }
        self
    }

    /// Block type to the ordered child types that may name it.
    pub fn named_blocks<K, I>(mut self, entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for (kind, candidates) in entries {
            self.tables
                .named_blocks
                .insert(kind.into().to_lowercase(), collect_strings(candidates));
        }
        self
    }

    /// Block type to the ordered value slots of its merged statement.
    pub fn multi_token<K, I>(mut self, entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for (kind, slots) in entries {
            self.tables
                .multi_token
                .insert(kind.into().to_lowercase(), collect_strings(slots));
        }
        self
    }

    /// Parent type to the child types renamed to `<parent>_<child>`.
    pub fn parent_exceptions<K, I>(mut self, entries: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for (parent, children) in entries {
            self.tables
                .parent_exceptions
                .entry(parent.into().to_lowercase())
                .or_default()
                .extend(collect_strings(children));
        }
        self
    }

    /// Discovered type to the canonical statement it renders through.
    pub fn variations<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (kind, canonical) in entries {
            self.tables
                .variations
                .insert(kind.into().to_lowercase(), canonical.into().to_lowercase());
        }
        self
    }

    /// Game localisation entries.
    pub fn localisation<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, text) in entries {
            self.tables
                .localisation
                .insert(key.into().to_lowercase(), text.into());
        }
        self
    }

    /// Region identifiers recognized as scopes.
    pub fn regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tables
            .regions
            .extend(collect_strings(regions));
        self
    }

    /// Parses the pending templates and derives the operator-aware and
    /// section-header sets.
    pub fn build(self) -> Result<RuleTables, ParseError> {
        let mut tables = self.tables;
        for (key, source) in self.raw_templates {
            let template = parse_template(&source).map_err(|error| match error {
                ParseError::Syntax {
                    line,
                    column,
                    message,
                } => ParseError::Syntax {
                    line,
                    column,
                    message: format!("template '{key}': {message}"),
                },
                other => other,
            })?;
            tables.templates.insert(key.to_lowercase(), template);
        }

        tables.operator_aware = tables
            .templates
            .iter()
            .filter(|(_, template)| template.has_operator())
            .map(|(key, _)| key.clone())
            .collect();
        tables.section_headers = tables
            .templates
            .iter()
            .filter(|(_, template)| template.is_section_header())
            .map(|(key, _)| key.clone())
            .collect();
        Ok(tables)
    }
}

fn collect_strings<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    items
        .into_iter()
        .map(|item| item.into().to_lowercase())
        .collect()
}
