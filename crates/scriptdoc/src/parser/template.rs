//! Statement template parser using winnow.
//!
//! Parses rule-file templates into an AST. Handles:
//! - Literal text segments
//! - Positional value slots `%s` and explicit slots `%N$s`
//! - The `[OPERATOR]` marker
//! - The `%%` escape (a literal percent sign that also marks percentages)

use scriptdoc_semantics::OPERATOR_MARKER;
use winnow::combinator::{alt, delimited, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use super::ast::{Segment, Template};
use super::error::ParseError;

/// Parse a template string into an AST.
///
/// # Example
///
/// ```
/// use scriptdoc::parser::{Segment, parse_template};
///
/// let template = parse_template("Prestige [OPERATOR] %s").unwrap();
/// assert!(template.has_operator());
/// assert_eq!(template.segments.last(), Some(&Segment::Value(None)));
/// ```
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(segments) if remaining.is_empty() => Ok(Template {
            segments,
            source: input.to_string(),
        }),
        Ok(_) => Err(syntax_error(
            input,
            remaining,
            format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        )),
        Err(e) => Err(syntax_error(input, remaining, format!("parse error: {e}"))),
    }
}

fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let column = original.len() - remaining.len() + 1;
    ParseError::Syntax {
        line: 1,
        column,
        message,
    }
}

/// Parse a complete template into merged segments.
fn template(input: &mut &str) -> ModalResult<Vec<Segment>> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(merge_literals(segments))
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }
    result
}

/// Parse a single segment.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "%%".value(Segment::Literal("%".to_string())),
        "%s".value(Segment::Value(None)),
        explicit_slot,
        OPERATOR_MARKER.value(Segment::Operator),
        '['.value(Segment::Literal("[".to_string())),
        literal_char,
    ))
    .parse_next(input)
}

/// Parse an explicit slot: %N$s
fn explicit_slot(input: &mut &str) -> ModalResult<Segment> {
    let digits: &str = delimited('%', take_while(1.., |c: char| c.is_ascii_digit()), "$s")
        .parse_next(input)?;
    match digits.parse::<usize>() {
        Ok(position) if position > 0 => Ok(Segment::Value(Some(position - 1))),
        _ => Err(ErrMode::Cut(ContextError::new())),
    }
}

/// Parse a single literal character (not % or [).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    none_of(['%', '['])
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
