//! Error types for rule loading.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur while loading rule tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a rule or game file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Malformed rule file entry or template.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A lookup rule names a value type that does not exist.
    #[error("{path}: unknown value type '{name}'")]
    UnknownValueType { path: PathBuf, name: String },

    /// A variation entry is not `path, level`.
    #[error("{path}: invalid variation entry '{entry}'")]
    InvalidVariation { path: PathBuf, entry: String },

    /// A script read by the loader is structurally broken.
    #[error("{path}: {source}")]
    Script {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// Attaches a file path to a rule-file parse error.
    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, error: ParseError) -> Self {
        match error {
            ParseError::Syntax {
                column, message, ..
            } => LoadError::Parse {
                path: path.into(),
                line,
                column,
                message,
            },
            other => LoadError::Parse {
                path: path.into(),
                line,
                column: 0,
                message: other.to_string(),
            },
        }
    }
}

/// Known keys close to `key` by edit distance, closest first, at most three.
///
/// Keys of up to three characters allow one edit, longer keys two.
pub fn compute_suggestions(key: &str, available: &[String]) -> Vec<String> {
    let max_distance = if key.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), candidate))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
