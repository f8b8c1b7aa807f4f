//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// A statement type that no template resolved.
pub struct UnresolvedStatement {
    /// Statement type or missing template key.
    pub kind: String,
    /// Number of rendered files it appears in.
    pub files: usize,
    /// Similar template keys.
    pub suggestions: Vec<String>,
}

/// Format unresolved statements as an ASCII table.
pub fn format_coverage_table(rows: &[UnresolvedStatement]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Statement", "Files", "Did you mean"]);

    for row in rows {
        table.add_row(vec![
            row.kind.clone(),
            row.files.to_string(),
            row.suggestions.join(", "),
        ]);
    }

    table
}
