//! Renders game event scripts as localized wiki documentation.
//!
//! The pipeline is: [`parser::normalize`] splits a script into one statement
//! per line, [`parser::build_tree`] reconstructs the block nesting, and
//! [`interpreter::render`] walks the tree against a set of [`RuleTables`] to
//! produce a [`Document`].
//!
//! # Example
//!
//! ```
//! use scriptdoc::{Diagnostics, RuleTables, parser, render};
//!
//! let tables = RuleTables::builder()
//!     .templates([("trigger", "Trigger conditions:"), ("owner", "Owned by %s")])
//!     .build()
//!     .unwrap();
//!
//! let lines = parser::normalize("country_event = { trigger = { owner = ROOT } }");
//! let tree = parser::build_tree(&lines).unwrap();
//! let mut diagnostics = Diagnostics::new();
//! let document = render(&tree, &tables, &mut diagnostics);
//!
//! assert_eq!(document.lines().last().unwrap(), "* Owned by our country");
//! ```

pub mod interpreter;
pub mod parser;
pub mod types;

pub use interpreter::{
    LoadError, RuleSources, RuleTables, compute_suggestions, expand_modifiers, render,
};
pub use parser::ParseError;
pub use types::{Diagnostics, Document, Line, Token, TokenId, TokenTree};

pub use scriptdoc_semantics::{Operator, Scope, ValueType};
