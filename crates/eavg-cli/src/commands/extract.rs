use crate::cli::Cli;
use crate::config::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use eavg::engine::progress::ProgressReporter;
use eavg::workflows;
use std::path::PathBuf;
use tracing::info;

pub fn run(cli: &Cli) -> Result<Vec<PathBuf>> {
    let app = build_config(cli)?;

    if !app.run.output_dir.is_dir() {
        info!("Creating output directory {:?}", &app.run.output_dir);
        std::fs::create_dir_all(&app.run.output_dir).map_err(CliError::Io)?;
    }

    let progress_handler = if cli.quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the extraction workflow on {} file(s)...", app.files.len());
    let report = workflows::extract::run(&app.files, &app.run, &reporter)?;
    let written = workflows::extract::write_report(&report, &app.run)?;

    for path in &written {
        info!("Wrote {}", path.display());
    }
    Ok(written)
}
