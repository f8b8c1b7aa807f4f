//! Value classification and formatting.

use std::sync::LazyLock;

use regex::Regex;
use scriptdoc_semantics::{REST_OF_CAMPAIGN, Scope, ValueType};

use super::tables::RuleTables;
use crate::parser::Template;
use crate::types::Token;

static COUNTRY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]{3}$").expect("country tag pattern is valid"));

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.?\d*$").expect("number pattern is valid"));

/// True if `value` is a three-letter country tag (other than `yes`) or a
/// scope keyword.
pub fn is_country_reference(value: &str) -> bool {
    Scope::parse(value).is_some()
        || (COUNTRY_TAG.is_match(value) && !value.eq_ignore_ascii_case("yes"))
}

/// True if `value` is a plain decimal number.
pub fn is_numeric(value: &str) -> bool {
    NUMBER.is_match(value)
}

/// True if `value` should be looked up in the game localisation.
pub fn is_lookup_eligible(value: &str) -> bool {
    !value.contains(' ') && !is_numeric(value)
}

/// Formats a duration of `amount` units.
///
/// Days are converted to months or years with truncating arithmetic, so 45
/// days is "1 months".
pub fn format_duration(value_type: ValueType, amount: i64) -> String {
    if amount == -1 {
        return REST_OF_CAMPAIGN.to_string();
    }
    match value_type {
        ValueType::Days if amount < 31 => format!("{amount} days"),
        ValueType::Days if amount < 365 => format!("{} months", (amount * 12).div_euclid(365)),
        ValueType::Days => format!("{} years", amount.div_euclid(365)),
        ValueType::Months => format!("{amount} months"),
        ValueType::Years => format!("{amount} years"),
        ValueType::Country | ValueType::Province | ValueType::State | ValueType::Other => {
            amount.to_string()
        }
    }
}

/// Formats a fraction as a percentage number without the sign.
///
/// Whole percentages are truncated to an integer; values below one percent
/// keep one decimal place.
pub fn format_percentage(fraction: f64) -> String {
    let percent = (fraction * 100_000.0).round() / 1000.0;
    if percent.abs() >= 1.0 {
        format!("{}", percent.trunc() as i64)
    } else {
        format!("{percent:.1}")
    }
}

impl RuleTables {
    /// Classifies the value of a statement of type `kind`.
    pub fn classify(&self, kind: &str, value: Option<&str>) -> ValueType {
        let Some(value) = value else {
            return ValueType::Other;
        };
        match self.value_type(kind) {
            Some(ValueType::Country) if !is_country_reference(value) => ValueType::Other,
            Some(ValueType::Province | ValueType::State) if is_country_reference(value) => {
                ValueType::Country
            }
            Some(value_type) => value_type,
            None => ValueType::Other,
        }
    }

    /// Localizes a value through the lookup cascade: exact key, then
    /// `building_<key>`, then `<key>_title`. Returns the key itself when
    /// nothing matches.
    pub fn find_localisation(&self, key: &str) -> String {
        self.localisation(key)
            .or_else(|| self.localisation(&format!("building_{key}")))
            .or_else(|| self.localisation(&format!("{key}_title")))
            .unwrap_or(key)
            .to_string()
    }

    /// Name of a country reference, if it has one.
    pub(crate) fn country_localisation(&self, value: &str) -> Option<String> {
        match Scope::parse(value) {
            Some(scope) => Some(scope.phrase().to_string()),
            None => self.localisation(value).map(str::to_string),
        }
    }

    /// Name of a country reference, or the tag itself.
    pub fn country_name(&self, value: &str) -> String {
        self.country_localisation(value)
            .unwrap_or_else(|| value.to_string())
    }

    /// Formats the value of `token` for display, classifying it first.
    pub fn localize_value(&self, token: &Token) -> String {
        let value_type = self.classify(token.kind(), token.value());
        self.format_value(token, value_type, self.template(token.kind()))
    }

    /// Formats the value of `token` as `value_type`.
    ///
    /// `template` is the template the value will be substituted into; it
    /// decides percentage formatting and the explicit `+` sign.
    pub(crate) fn format_value(
        &self,
        token: &Token,
        value_type: ValueType,
        template: Option<&Template>,
    ) -> String {
        let Some(raw) = token.value() else {
            return String::new();
        };
        match value_type {
            ValueType::Province => {
                return self
                    .localisation(&format!("prov{raw}"))
                    .unwrap_or(raw)
                    .to_string();
            }
            ValueType::State => {
                return self
                    .localisation(&format!("state_{raw}"))
                    .unwrap_or(raw)
                    .to_string();
            }
            ValueType::Days | ValueType::Months | ValueType::Years => {
                if let Ok(amount) = raw.parse::<i64>() {
                    return format_duration(value_type, amount);
                }
            }
            ValueType::Country | ValueType::Other => {}
        }

        if is_country_reference(raw) {
            self.country_name(raw)
        } else if is_lookup_eligible(raw) {
            self.find_localisation(raw)
        } else if !is_numeric(raw) {
            raw.to_string()
        } else {
            match raw.parse::<f64>() {
                Ok(number) => format_number(raw, number, template),
                Err(_) => raw.to_string(),
            }
        }
    }
}

fn format_number(raw: &str, number: f64, template: Option<&Template>) -> String {
    let text = match template {
        Some(template) if template.has_percent() => format_percentage(number),
        _ => raw.to_string(),
    };
    let signed = template.is_some_and(Template::starts_with_value) && number > 0.0;
    if signed && !text.starts_with('+') {
        format!("+{text}")
    } else {
        text
    }
}
