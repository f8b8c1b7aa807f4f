//! Miette diagnostic wrapper for script parse errors.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use scriptdoc::ParseError;
use thiserror::Error;

/// A miette-compatible diagnostic for structural script errors.
///
/// Script errors are located on normalized statement lines, so the source
/// shown is the normalized script.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(scriptdoc::structure))]
pub struct ScriptDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl ScriptDiagnostic {
    /// Create a diagnostic from a ParseError and the normalized lines it refers to.
    pub fn from_parse_error(path: &Path, lines: &[String], err: &ParseError) -> Self {
        let content = lines.join("\n");
        let line = err.line().max(1);

        // Byte offset of the start of the error line.
        let offset = lines
            .iter()
            .take(line - 1)
            .map(|l| l.len() + 1)
            .sum::<usize>()
            .min(content.len());
        let length = lines.get(line - 1).map_or(0, String::len).max(1);
        let length = length.min(content.len().saturating_sub(offset));

        let help = match err {
            ParseError::UnmatchedClose { .. } => {
                Some("remove the extra '}' or open the block it closes".to_string())
            }
            ParseError::UnclosedBlock { kind, .. } => Some(format!("add a '}}' closing '{kind}'")),
            ParseError::EmptyLine { .. }
            | ParseError::MalformedStatement { .. }
            | ParseError::Syntax { .. } => None,
        };

        ScriptDiagnostic {
            src: NamedSource::new(path.display().to_string(), content),
            span: (offset, length).into(),
            message: err.to_string(),
            help,
        }
    }
}
