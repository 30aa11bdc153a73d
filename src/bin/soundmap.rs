//! soundmap CLI Binary
//!
//! Runs the fixed pipeline in the current working directory: clears `sounds/`,
//! stages `org/` into `files/`, resolves `objects.json`, removes `files/`.

use anyhow::Context;
use clap::Parser;
use soundmap::cli::{format_run_summary, map_error, Cli, RunContext};
use soundmap::logging::init_logging;
use soundmap::report::ConsoleReporter;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let context = match setup(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    info!(root = %context.root().display(), "soundmap starting");

    let mut reporter = ConsoleReporter::stdout();
    match context.execute(&mut reporter) {
        Ok(summary) => {
            info!(
                resolved = summary.resolve.succeeded(),
                records = summary.records,
                clean = summary.is_clean(),
                "Run completed"
            );
            println!();
            print!("{}", format_run_summary(&summary));
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Load config for the working directory and initialize logging.
fn setup(cli: &Cli) -> anyhow::Result<RunContext> {
    let root = std::env::current_dir().context("Failed to read the working directory")?;
    let context = RunContext::new(root, cli.config.as_deref())
        .context("Failed to load configuration")?;

    let logging_config = context.logging_config(cli);
    init_logging(Some(&logging_config), context.root())
        .context("Failed to initialize logging")?;

    Ok(context)
}
