//! Coverage command implementation.

use std::collections::BTreeMap;

use clap::Args;
use miette::{IntoDiagnostic, Report, Result};
use scriptdoc::{compute_suggestions, render, Diagnostics};
use serde::Serialize;

use super::{event_files, load_tables, parse_file};
use crate::config::SourceArgs;
use crate::output::table::{format_coverage_table, UnresolvedStatement};
use crate::output::{success, warning};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Exit with non-zero code if any statement type is unresolved.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    files: usize,
    templates: usize,
    unresolved: Vec<UnresolvedJson>,
}

#[derive(Debug, Serialize)]
struct UnresolvedJson {
    kind: String,
    files: usize,
    suggestions: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let sources = args.source.settings()?.rule_sources()?;
    let tables = load_tables(&sources)?;
    let known: Vec<String> = tables.template_keys().map(str::to_string).collect();

    // Statement type -> number of files it is unresolved in.
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut files = 0;
    for path in event_files(&sources)? {
        let tree = match parse_file(&path)? {
            Ok(tree) => tree,
            Err(diagnostic) => {
                eprintln!("{:?}", Report::new(diagnostic));
                continue;
            }
        };
        let mut diagnostics = Diagnostics::new();
        render(&tree, &tables, &mut diagnostics);
        for kind in diagnostics.iter() {
            *counts.entry(kind.to_string()).or_default() += 1;
        }
        files += 1;
    }

    let rows: Vec<UnresolvedStatement> = counts
        .into_iter()
        .map(|(kind, count)| UnresolvedStatement {
            suggestions: compute_suggestions(&kind, &known),
            kind,
            files: count,
        })
        .collect();

    if args.json {
        let json = CoverageJson {
            files,
            templates: known.len(),
            unresolved: rows
                .iter()
                .map(|row| UnresolvedJson {
                    kind: row.kind.clone(),
                    files: row.files,
                    suggestions: row.suggestions.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else if rows.is_empty() {
        println!(
            "{} every statement in {} files has a template",
            success("ok"),
            files
        );
    } else {
        println!("{}", format_coverage_table(&rows));
        println!(
            "\n{} {} unresolved statement types across {} files",
            warning("warning:"),
            rows.len(),
            files
        );
    }

    if args.strict && !rows.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
