use serde::Serialize;

/// Presentation bucket of one output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Line {
    /// Page header for a top-level block: `\n== text ==\n`.
    Header,
    /// Bold subtitle for a block directly inside a top-level block.
    Subtitle,
    /// Bullet line with the given number of `*` markers.
    Bullet(usize),
}

impl Line {
    /// Chooses the bucket for text emitted at `depth` (root children at 0).
    pub fn for_depth(depth: usize) -> Line {
        match depth {
            0 => Line::Header,
            1 => Line::Subtitle,
            deeper => Line::Bullet(deeper - 1),
        }
    }

    /// Wraps `text` in the wiki markup of this bucket.
    pub fn format(self, text: &str) -> String {
        match self {
            Line::Header => format!("\n== {text} ==\n"),
            Line::Subtitle => format!("\n'''{text}'''\n"),
            Line::Bullet(markers) => format!("{} {text}", "*".repeat(markers)),
        }
    }
}

/// The rendered lines of one script file, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    lines: Vec<String>,
    kinds: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Formats `text` for `depth` and appends it. Empty text is dropped.
    pub fn emit(&mut self, depth: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let kind = Line::for_depth(depth);
        self.lines.push(kind.format(text));
        self.kinds.push(kind);
    }

    /// The formatted lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The bucket of each line, parallel to [`Document::lines`].
    pub fn kinds(&self) -> &[Line] {
        &self.kinds
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines with newlines, ending with a newline.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
