//! Reconstructs block nesting from a flat list of statement lines.

use scriptdoc_semantics::ROOT_KIND;

use super::error::ParseError;
use super::tokenizer::tokenize_line;
use crate::types::{Token, TokenId, TokenTree};

/// Build a token tree from normalized statement lines.
///
/// A line ending in `{` opens a block, a line consisting of `}` closes the
/// innermost open block, and every other line is a statement inside the
/// current block. Braces must balance.
///
/// # Example
///
/// ```
/// use scriptdoc::parser::build_tree;
///
/// let tree = build_tree(&["option = {", "name = accept", "}"]).unwrap();
/// let option = tree.children(tree.root())[0];
/// assert_eq!(tree.token(option).kind(), "option");
/// assert_eq!(tree.children(option).len(), 1);
/// ```
pub fn build_tree<S: AsRef<str>>(lines: &[S]) -> Result<TokenTree, ParseError> {
    let mut tree = TokenTree::new(Token::bare(ROOT_KIND));
    let mut cursor = TokenId::ROOT;
    // Line numbers of the currently open blocks.
    let mut open: Vec<usize> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index + 1;
        let text = line.as_ref().trim();

        if text == "}" {
            cursor = tree
                .parent(cursor)
                .ok_or(ParseError::UnmatchedClose { line: line_number })?;
            open.pop();
        } else if let Some(header) = text.strip_suffix('{') {
            let token = tokenize_line(header, line_number)?;
            cursor = tree.push(cursor, token);
            open.push(line_number);
        } else {
            let token = tokenize_line(text, line_number)?;
            tree.push(cursor, token);
        }
    }

    if cursor != TokenId::ROOT {
        return Err(ParseError::UnclosedBlock {
            kind: tree.token(cursor).kind().to_string(),
            line: open.last().copied().unwrap_or_default(),
        });
    }
    Ok(tree)
}
