//! Parsed statement templates.

use scriptdoc_semantics::{OPERATOR_MARKER, PERCENT_MARKER};

/// A statement template such as `"Owned by %s"` or `"Prestige [OPERATOR] %s"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
    /// The template exactly as written in the rule file.
    pub source: String,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text; `%%` has already been reduced to `%`.
    Literal(String),
    /// A value slot: `%s` (next positional value) or `%N$s` (value N, 1-based).
    Value(Option<usize>),
    /// The `[OPERATOR]` marker.
    Operator,
}

impl Template {
    /// True if the template contains the operator marker.
    pub fn has_operator(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Operator))
    }

    /// True if the template contains the `%%` percentage marker.
    pub fn has_percent(&self) -> bool {
        self.source.contains(PERCENT_MARKER)
    }

    /// True if the first segment is a value slot.
    pub fn starts_with_value(&self) -> bool {
        matches!(self.segments.first(), Some(Segment::Value(_)))
    }

    /// True if the template introduces a nested section (ends with `:`).
    pub fn is_section_header(&self) -> bool {
        self.source.trim_end().ends_with(':')
    }

    /// Substitutes `values` and `operator` into the template.
    ///
    /// Missing values render as empty text; a missing operator word leaves the
    /// marker in place.
    pub fn render(&self, values: &[String], operator: Option<&str>) -> String {
        let mut output = String::new();
        let mut next = 0;
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Value(explicit) => {
                    let index = explicit.unwrap_or_else(|| {
                        next += 1;
                        next - 1
                    });
                    if let Some(value) = values.get(index) {
                        output.push_str(value);
                    }
                }
                Segment::Operator => output.push_str(operator.unwrap_or(OPERATOR_MARKER)),
            }
        }
        output
    }
}
