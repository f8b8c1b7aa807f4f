//! Parse error types for scriptdoc.

use thiserror::Error;

/// An error that makes a script, template or rule file unusable.
///
/// Line numbers of script errors refer to normalized statement lines (see
/// [`crate::parser::normalize`]), starting at 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A statement line with nothing on it.
    #[error("empty statement at line {line}")]
    EmptyLine { line: usize },

    /// A statement whose key is missing or cannot be classified.
    #[error("malformed statement at line {line}: '{text}'")]
    MalformedStatement { line: usize, text: String },

    /// A closing brace without a matching open block.
    #[error("unmatched '}}' at line {line}")]
    UnmatchedClose { line: usize },

    /// End of input reached while a block was still open.
    #[error("block '{kind}' opened at line {line} is never closed")]
    UnclosedBlock { kind: String, line: usize },

    /// A syntax error in a template or rule file, with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },
}

impl ParseError {
    /// The line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::EmptyLine { line }
            | ParseError::MalformedStatement { line, .. }
            | ParseError::UnmatchedClose { line }
            | ParseError::UnclosedBlock { line, .. }
            | ParseError::Syntax { line, .. } => *line,
        }
    }
}
