//! Shared scriptdoc vocabularies used by both the renderer and the CLI.
//!
//! This crate centralizes the closed sets of the scripting language (comparison
//! operators, value types, scope keywords) and the fixed phrases the renderer
//! emits, so that rule loading, rendering and reporting never drift apart.

use std::fmt;

/// Literal marker inside a statement template that is replaced by an operator word.
pub const OPERATOR_MARKER: &str = "[OPERATOR]";

/// Literal marker inside a statement template that flags a percentage value.
pub const PERCENT_MARKER: &str = "%%";

/// Phrase used for durations of `-1` and for missing `duration` slots.
pub const REST_OF_CAMPAIGN: &str = "the rest of the campaign";

/// Inserted before the trailing colon of an inverted section header.
pub const NONE_OF_THE_FOLLOWING: &str = " - none of the following";

/// Suffix appended to a template key to select its inverted wording.
pub const FALSE_SUFFIX: &str = "_false";

/// Child type of a multi-token expression whose value names a modifier.
pub const MODIFIER_NAME_SLOT: &str = "name";

/// Slot of a multi-token expression that defaults to [`REST_OF_CAMPAIGN`].
pub const DURATION_SLOT: &str = "duration";

/// Kind of the synthetic root token of every file.
pub const ROOT_KIND: &str = "file";

/// Block types that invert everything nested directly inside them.
const INVERSION_KEYWORDS: &[&str] = &["not", "nor"];

/// Returns true if a block of this type negates its contents.
pub fn is_inversion(kind: &str) -> bool {
    INVERSION_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(kind))
}

/// Returns true if a raw value is the boolean negation marker (`no`).
pub fn is_negation_value(value: &str) -> bool {
    value.eq_ignore_ascii_case("no")
}

/// Comparison operator of a statement.
///
/// Every operator has a negated partner; [`Operator::negate`] swaps the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    NotLess,
    More,
    NotMore,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 6] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::NotLess,
        Operator::More,
        Operator::NotMore,
    ];

    /// Classifies the comparison character of a statement line.
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '=' => Some(Operator::Equal),
            '<' => Some(Operator::Less),
            '>' => Some(Operator::More),
            _ => None,
        }
    }

    /// Returns the partner of this operator. Applying it twice is the identity.
    pub fn negate(self) -> Operator {
        match self {
            Operator::Equal => Operator::NotEqual,
            Operator::NotEqual => Operator::Equal,
            Operator::Less => Operator::NotLess,
            Operator::NotLess => Operator::Less,
            Operator::More => Operator::NotMore,
            Operator::NotMore => Operator::More,
        }
    }

    /// Key of this operator in the operator-word table.
    pub fn name(self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::NotEqual => "notequal",
            Operator::Less => "less",
            Operator::NotLess => "notless",
            Operator::More => "more",
            Operator::NotMore => "notmore",
        }
    }

    /// Parses an operator-word table key.
    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the value of a statement is interpreted before localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Country,
    Province,
    State,
    Days,
    Months,
    Years,
    Other,
}

impl ValueType {
    /// Parses a lookup-rule table name (case-insensitive).
    pub fn from_name(name: &str) -> Option<ValueType> {
        match name.to_ascii_lowercase().as_str() {
            "country" => Some(ValueType::Country),
            "province" => Some(ValueType::Province),
            "state" => Some(ValueType::State),
            "days" => Some(ValueType::Days),
            "months" => Some(ValueType::Months),
            "years" => Some(ValueType::Years),
            "other" => Some(ValueType::Other),
            _ => None,
        }
    }
}

/// Scope keywords that refer to a country relative to the current event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    Root,
    This,
    From,
    Controller,
    Owner,
    Prev,
}

impl Scope {
    /// Parses a scope keyword (case-insensitive).
    pub fn parse(value: &str) -> Option<Scope> {
        match value.to_ascii_uppercase().as_str() {
            "ROOT" => Some(Scope::Root),
            "THIS" => Some(Scope::This),
            "FROM" => Some(Scope::From),
            "CONTROLLER" => Some(Scope::Controller),
            "OWNER" => Some(Scope::Owner),
            "PREV" => Some(Scope::Prev),
            _ => None,
        }
    }

    /// Fixed English phrase for this scope.
    pub fn phrase(self) -> &'static str {
        match self {
            Scope::Root => "our country",
            Scope::This => "this country",
            Scope::From => "from",
            Scope::Controller => "the province's controller",
            Scope::Owner => "the province's owner",
            Scope::Prev => "the previous scope",
        }
    }
}
