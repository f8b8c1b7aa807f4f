//! Implementation of the `scriptdoc check` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Report};
use serde::Serialize;

use super::parse_file;
use crate::output::success;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Script files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckResult {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut results = Vec::new();
    for path in &args.files {
        let result = match parse_file(path)? {
            Ok(tree) => {
                if !args.json {
                    println!(
                        "{} {} ({} statements)",
                        success("ok"),
                        path.display(),
                        tree.len() - 1
                    );
                }
                CheckResult {
                    file: path.display().to_string(),
                    ok: true,
                    error: None,
                }
            }
            Err(diagnostic) => {
                let message = diagnostic.to_string();
                if !args.json {
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                CheckResult {
                    file: path.display().to_string(),
                    ok: false,
                    error: Some(message),
                }
            }
        };
        results.push(result);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    }

    if results.iter().all(|result| result.ok) {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
