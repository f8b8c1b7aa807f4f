//! Turns a single token into a natural-language fragment.

use scriptdoc_semantics::{FALSE_SUFFIX, NONE_OF_THE_FOLLOWING, Operator, ValueType};

use super::tables::RuleTables;
use super::value::is_country_reference;
use crate::parser::Template;
use crate::types::{Diagnostics, TokenId, TokenTree};

impl RuleTables {
    /// Localizes the token `id` of `tree`.
    ///
    /// Variations render through their canonical template. Other tokens are
    /// classified, their value formatted, and the template key composed from
    /// the type (`<type>_country` for country values, `<parent>_<type>` for
    /// parent exceptions). Tokens without a template fall back to scope
    /// localisation, then to the raw `type: value` text with a diagnostic.
    pub fn localize(
        &self,
        tree: &TokenTree,
        id: TokenId,
        inverted: bool,
        diagnostics: &mut Diagnostics,
    ) -> String {
        let token = tree.token(id);
        let kind = token.kind();

        if let Some(canonical) = self.variation(kind) {
            let label = self.find_localisation(kind);
            let value = self.format_value(token, ValueType::Other, self.template(canonical));
            return self
                .format_statement(canonical, token.operator(), inverted, &[label, value])
                .unwrap_or_else(|missing| {
                    diagnostics.record(missing);
                    raw_text(kind, token.value())
                });
        }

        let value_type = self.classify(kind, token.value());
        let mut key = kind.to_string();
        if value_type == ValueType::Country {
            let country_key = format!("{kind}_country");
            if self.has_template(&country_key) {
                key = country_key;
            }
        }
        if let Some(parent) = tree.parent(id) {
            let parent_kind = tree.token(parent).kind();
            if self.is_parent_exception(parent_kind, kind) {
                key = format!("{parent_kind}_{key}");
            }
        }

        let values = match token.value() {
            Some(_) => vec![self.format_value(token, value_type, self.template(&key))],
            None => Vec::new(),
        };
        match self.format_statement(&key, token.operator(), inverted, &values) {
            Ok(text) => text,
            Err(missing) => self.scope_fallback(kind, inverted).unwrap_or_else(|| {
                diagnostics.record(missing);
                raw_text(kind, token.value())
            }),
        }
    }

    /// Selects the template for `key` and substitutes `values` into it.
    ///
    /// Inverted statements use `<key>_false` unless the template is
    /// operator-aware, in which case the operator is negated instead. An
    /// inverted section header without a `_false` wording reads
    /// "... - none of the following:". Returns the missing template key
    /// when nothing applies.
    pub fn format_statement(
        &self,
        key: &str,
        operator: Option<Operator>,
        inverted: bool,
        values: &[String],
    ) -> Result<String, String> {
        let key = key.to_lowercase();
        if inverted && !self.is_operator_aware(&key) {
            let false_key = format!("{key}{FALSE_SUFFIX}");
            if let Some(template) = self.template(&false_key) {
                return Ok(self.substitute(template, operator, inverted, values));
            }
            let header = self
                .template(&key)
                .filter(|_| self.is_section_header(&key));
            if let Some(template) = header {
                let text = self.substitute(template, operator, inverted, values);
                return Ok(none_of_the_following(&text));
            }
            return Err(false_key);
        }
        match self.template(&key) {
            Some(template) => Ok(self.substitute(template, operator, inverted, values)),
            None => Err(key),
        }
    }

    /// Localizes a statement type that names a scope (province, state,
    /// region or country) as a section header.
    pub fn scope_fallback(&self, kind: &str, inverted: bool) -> Option<String> {
        let name = self
            .localisation(&format!("prov{kind}"))
            .map(str::to_string)
            .or_else(|| self.localisation(&format!("state_{kind}")).map(str::to_string))
            .or_else(|| {
                self.is_region(kind)
                    .then(|| self.find_localisation(kind))
            })
            .or_else(|| {
                is_country_reference(kind)
                    .then(|| self.country_localisation(kind))
                    .flatten()
            })?;
        if inverted {
            Some(format!("{name}{NONE_OF_THE_FOLLOWING}:"))
        } else {
            Some(format!("{name}:"))
        }
    }

    fn substitute(
        &self,
        template: &Template,
        operator: Option<Operator>,
        inverted: bool,
        values: &[String],
    ) -> String {
        if !template.has_operator() {
            return template.render(values, None);
        }
        let operator = operator.unwrap_or(Operator::Equal);
        let operator = if inverted { operator.negate() } else { operator };
        template.render(values, self.operator_word(operator))
    }
}

/// Text used when a statement has no template at all.
pub(crate) fn raw_text(kind: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{kind}: {value}"),
        None => kind.to_string(),
    }
}

/// Inserts the "none of the following" phrase before a trailing colon.
fn none_of_the_following(header: &str) -> String {
    let trimmed = header.trim_end();
    match trimmed.strip_suffix(':') {
        Some(head) => format!("{head}{NONE_OF_THE_FOLLOWING}:"),
        None => format!("{trimmed}{NONE_OF_THE_FOLLOWING}"),
    }
}
