//! Implementation of the `scriptdoc eval` command.

use std::path::{Path, PathBuf};

use clap::Args;
use miette::{miette, IntoDiagnostic, Report};
use scriptdoc::interpreter::read_script;
use scriptdoc::parser::{build_tree, normalize};
use scriptdoc::{render, Diagnostics, Document};
use serde::Serialize;

use super::load_tables;
use crate::config::SourceArgs;
use crate::output::ScriptDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, Args)]
pub struct EvalArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Script text to render
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub script: Option<String>,

    /// Script file to render
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval command.
#[derive(Serialize)]
struct EvalResult<'a> {
    document: &'a Document,
    unresolved: &'a Diagnostics,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let sources = args.source.settings()?.rule_sources()?;
    let tables = load_tables(&sources)?;

    let (name, text) = match (&args.script, &args.file) {
        (Some(script), _) => ("<script>".to_string(), script.clone()),
        (None, Some(path)) => (path.display().to_string(), read_script(path).into_diagnostic()?),
        (None, None) => return Err(miette!("either --script or --file is required")),
    };

    let lines = normalize(&text);
    let tree = match build_tree(&lines) {
        Ok(tree) => tree,
        Err(error) => {
            let diagnostic = ScriptDiagnostic::from_parse_error(Path::new(&name), &lines, &error);
            if args.json {
                let output = serde_json::json!({ "error": diagnostic.to_string() });
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("{:?}", Report::new(diagnostic));
            }
            return Ok(exitcode::DATAERR);
        }
    };

    let mut diagnostics = Diagnostics::new();
    let document = render(&tree, &tables, &mut diagnostics);
    if args.json {
        let output = EvalResult {
            document: &document,
            unresolved: &diagnostics,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        print!("{}", document.to_text());
    }
    Ok(exitcode::OK)
}
