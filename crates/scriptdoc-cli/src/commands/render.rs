//! Implementation of the `scriptdoc render` command.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use miette::{miette, IntoDiagnostic, Report};
use scriptdoc::{render, Diagnostics};

use super::{event_files, load_tables, output_name, parse_file};
use crate::config::SourceArgs;
use crate::output::{failure, success};

/// Name of the file listing unresolved statement types.
const ERRORS_FILE: &str = "errors.txt";

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Directory for rendered documents; defaults to ./output
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let mut settings = args.source.settings()?;
    if args.output.is_some() {
        settings.output = args.output;
    }
    let sources = settings.rule_sources()?;
    let tables = load_tables(&sources)?;
    let output_dir = settings.output_dir();
    fs::create_dir_all(&output_dir)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot create output directory {}: {}", output_dir.display(), e))?;

    let mut diagnostics = Diagnostics::new();
    let mut rendered = 0;
    let mut failed = 0;
    for path in event_files(&sources)? {
        tracing::debug!(path = %path.display(), "rendering");
        let tree = match parse_file(&path)? {
            Ok(tree) => tree,
            Err(diagnostic) => {
                eprintln!("{:?}", Report::new(diagnostic));
                failed += 1;
                continue;
            }
        };

        let mut file_diagnostics = Diagnostics::new();
        let document = render(&tree, &tables, &mut file_diagnostics);
        let target = output_dir.join(output_name(&path));
        fs::write(&target, document.to_text())
            .into_diagnostic()
            .map_err(|e| miette!("Cannot write {}: {}", target.display(), e))?;
        diagnostics.extend(&file_diagnostics);
        rendered += 1;
    }

    let mut errors = String::new();
    for kind in diagnostics.iter() {
        errors.push_str(kind);
        errors.push('\n');
    }
    let errors_path = output_dir.join(ERRORS_FILE);
    fs::write(&errors_path, errors)
        .into_diagnostic()
        .map_err(|e| miette!("Cannot write {}: {}", errors_path.display(), e))?;

    println!(
        "{} {} files into {} ({} unresolved statement types)",
        success("Rendered"),
        rendered,
        output_dir.display(),
        diagnostics.len()
    );
    if failed > 0 {
        eprintln!("{} {} files could not be parsed", failure("error:"), failed);
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
