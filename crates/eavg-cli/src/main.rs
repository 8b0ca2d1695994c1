mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::Result;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse_normalized(std::env::args_os());
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("🚀 eavg v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match commands::extract::run(&cli) {
        Ok(written) => {
            info!("✅ Wrote {} series file(s).", written.len());
            Ok(())
        }
        Err(e) => {
            error!("❌ Command failed: {}", e);
            Err(e)
        }
    }
}
