use std::fmt;

use scriptdoc_semantics::{Operator, is_negation_value};

/// One statement of a script: `kind OP value`, or the header of a block.
///
/// Tokens are immutable once parsed. Render-time state such as inversion is
/// tracked separately by the renderer.
///
/// # Example
///
/// ```
/// use scriptdoc::{Operator, Token};
///
/// let token = Token::new("has_idea", Some(Operator::Equal), Some("no".to_string()));
/// assert!(token.negated());
/// assert_eq!(token.kind(), "has_idea");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: String,
    operator: Option<Operator>,
    value: Option<String>,
    negated: bool,
}

impl Token {
    /// Creates a token. The kind is lower-cased; `negated` is derived from the value.
    pub fn new(kind: impl Into<String>, operator: Option<Operator>, value: Option<String>) -> Self {
        let kind = kind.into().to_lowercase();
        let negated = value.as_deref().is_some_and(is_negation_value);
        Self {
            kind,
            operator,
            value,
            negated,
        }
    }

    /// Creates a bare token with neither operator nor value.
    pub fn bare(kind: impl Into<String>) -> Self {
        Self::new(kind, None, None)
    }

    /// The lower-cased statement key.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The comparison operator, absent for bare block headers.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The raw value with surrounding quotes stripped.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// True if the value is the boolean negation marker.
    pub fn negated(&self) -> bool {
        self.negated
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self.operator {
            Some(Operator::Less | Operator::NotLess) => "<",
            Some(Operator::More | Operator::NotMore) => ">",
            Some(Operator::Equal | Operator::NotEqual) | None => "=",
        };
        match &self.value {
            Some(value) => write!(f, "{} {symbol} {value}", self.kind),
            None => f.write_str(&self.kind),
        }
    }
}
