//! Script, template and rule-file parsing.
//!
//! Script text goes through [`normalize`] (one statement per line), then
//! [`build_tree`] which tokenizes each line and reconstructs block nesting.
//! Statement templates from rule files are parsed by [`parse_template`].

pub mod ast;
pub mod error;
mod normalize;
mod rules;
mod template;
mod tokenizer;
mod tree;

pub use ast::*;
pub use error::ParseError;
pub use normalize::normalize;
pub use rules::{RuleEntry, parse_localisation_entries, parse_rule_entries, split_list};
pub use template::parse_template;
pub use tokenizer::tokenize;
pub use tree::build_tree;

use crate::types::TokenTree;

/// Normalize raw script text and build its token tree.
pub fn parse_script(source: &str) -> Result<TokenTree, ParseError> {
    build_tree(&normalize(source))
}
