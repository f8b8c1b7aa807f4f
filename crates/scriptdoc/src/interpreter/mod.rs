//! Rule-driven rendering of token trees.
//!
//! [`RuleTables`] hold every lookup table, loaded once through
//! [`RuleTables::load`] or assembled with [`RuleTables::builder`]. The
//! renderer walks a token tree against those tables, localizing each token
//! and merging multi-token statements, and collects unresolved statement
//! types in a [`Diagnostics`](crate::Diagnostics) set.

mod error;
mod loader;
mod localize;
mod merge;
mod modifiers;
mod render;
mod tables;
mod value;

pub use error::{LoadError, compute_suggestions};
pub use loader::{RuleSources, files_under, read_script, read_text};
pub use modifiers::expand_modifiers;
pub use render::render;
pub use tables::{RuleTables, RuleTablesBuilder};
pub use value::{
    format_duration, format_percentage, is_country_reference, is_lookup_eligible, is_numeric,
};
