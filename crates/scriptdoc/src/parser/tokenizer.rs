//! Classifies one normalized statement line into a [`Token`].

use scriptdoc_semantics::Operator;

use super::error::ParseError;
use crate::types::Token;

/// Tokenize a single statement line.
///
/// The operator is the first `=` in the line, or failing that the first `<`,
/// or failing that the first `>`. Without any of them the whole line is a
/// bare key. `<=` and `>=` are read as "not more" and "not less".
///
/// # Example
///
/// ```
/// use scriptdoc::Operator;
/// use scriptdoc::parser::tokenize;
///
/// let token = tokenize(r#"Has_Country_Flag = "flag_name""#).unwrap();
/// assert_eq!(token.kind(), "has_country_flag");
/// assert_eq!(token.operator(), Some(Operator::Equal));
/// assert_eq!(token.value(), Some("flag_name"));
/// ```
pub fn tokenize(text: &str) -> Result<Token, ParseError> {
    tokenize_line(text, 1)
}

/// Tokenize a statement line, reporting errors against `line`.
pub(crate) fn tokenize_line(text: &str, line: usize) -> Result<Token, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyLine { line });
    }

    let Some((index, symbol)) = find_operator(text) else {
        let kind = validate_kind(text, text, line)?;
        return Ok(Token::new(kind, None, None));
    };

    let mut key = &text[..index];
    let mut operator = Operator::from_symbol(symbol);
    if symbol == '=' {
        if let Some(stripped) = key.strip_suffix('<') {
            key = stripped;
            operator = Some(Operator::NotMore);
        } else if let Some(stripped) = key.strip_suffix('>') {
            key = stripped;
            operator = Some(Operator::NotLess);
        }
    }

    let kind = validate_kind(key, text, line)?;
    let value = strip_quotes(&text[index + 1..]);
    let value = (!value.is_empty()).then(|| value.to_string());
    Ok(Token::new(kind, operator, value))
}

/// Finds the operator by priority rather than position.
fn find_operator(text: &str) -> Option<(usize, char)> {
    ['=', '<', '>']
        .into_iter()
        .find_map(|symbol| text.find(symbol).map(|index| (index, symbol)))
}

fn validate_kind<'a>(key: &'a str, text: &str, line: usize) -> Result<&'a str, ParseError> {
    let key = key.trim();
    if key.is_empty() || key.contains(['{', '}']) {
        return Err(ParseError::MalformedStatement {
            line,
            text: text.to_string(),
        });
    }
    Ok(key)
}

fn strip_quotes(value: &str) -> &str {
    value.trim().trim_matches('"').trim()
}
