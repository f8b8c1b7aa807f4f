//! scriptdoc CLI entry point.
//!
//! Provides command-line tools for documenting game event scripts:
//! - `scriptdoc render` - Render every event file into wiki markup
//! - `scriptdoc check` - Validate script structure
//! - `scriptdoc coverage` - Report statement types without a template
//! - `scriptdoc eval` - Render a single snippet

mod commands;
mod config;
mod logging;
mod output;

use std::process::exit;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_eval, run_render, CheckArgs, CoverageArgs, EvalArgs, RenderArgs,
};

/// Game event script documentation tools.
#[derive(Debug, Parser)]
#[command(name = "scriptdoc")]
#[command(about = "Render game event scripts as wiki documentation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render every event file of a game
    Render(RenderArgs),
    /// Check script files for structural errors
    Check(CheckArgs),
    /// Report statement types that have no template
    Coverage(CoverageArgs),
    /// Render a single script snippet
    Eval(EvalArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    logging::init(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}
