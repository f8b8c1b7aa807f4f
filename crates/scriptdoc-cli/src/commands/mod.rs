//! CLI command implementations.

mod check;
mod coverage;
mod eval;
mod render;

use std::path::{Path, PathBuf};

use miette::IntoDiagnostic;
use scriptdoc::interpreter::{files_under, read_script};
use scriptdoc::parser::{build_tree, normalize};
use scriptdoc::{RuleSources, RuleTables, TokenTree};

use crate::output::ScriptDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use eval::{run_eval, EvalArgs};
pub use render::{run_render, RenderArgs};

/// Loads the rule tables named by `sources`.
fn load_tables(sources: &RuleSources) -> miette::Result<RuleTables> {
    let tables = RuleTables::load(sources).into_diagnostic()?;
    Ok(tables)
}

/// Event script files of the game, in sorted order.
fn event_files(sources: &RuleSources) -> miette::Result<Vec<PathBuf>> {
    files_under(&sources.events_dir()).into_diagnostic()
}

/// Reads and parses a script file, turning structural errors into a
/// diagnostic that shows the offending statement.
fn parse_file(path: &Path) -> miette::Result<Result<TokenTree, ScriptDiagnostic>> {
    let text = read_script(path).into_diagnostic()?;
    let lines = normalize(&text);
    Ok(build_tree(&lines).map_err(|error| ScriptDiagnostic::from_parse_error(path, &lines, &error)))
}

/// File name used for the rendered copy of `path`.
fn output_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}
