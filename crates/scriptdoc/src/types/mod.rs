mod diagnostics;
mod document;
mod token;
mod tree;

pub use diagnostics::Diagnostics;
pub use document::{Document, Line};
pub use token::Token;
pub use tree::{Node, TokenId, TokenTree};
