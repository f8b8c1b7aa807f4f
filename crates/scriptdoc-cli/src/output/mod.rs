//! Terminal and JSON output helpers.

pub mod diagnostic;
pub mod table;

pub use diagnostic::ScriptDiagnostic;

use owo_colors::{OwoColorize, Stream};

/// A label for stdout, green when color is enabled.
pub fn success(label: &str) -> String {
    label
        .if_supports_color(Stream::Stdout, |text| text.green().bold().to_string())
        .to_string()
}

/// A label for stderr, red when color is enabled.
pub fn failure(label: &str) -> String {
    label
        .if_supports_color(Stream::Stderr, |text| text.red().bold().to_string())
        .to_string()
}

/// A label for stdout, yellow when color is enabled.
pub fn warning(label: &str) -> String {
    label
        .if_supports_color(Stream::Stdout, |text| text.yellow().bold().to_string())
        .to_string()
}
