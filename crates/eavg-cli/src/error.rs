use eavg::core::models::interval::IntervalError;
use eavg::core::models::species::SpeciesError;
use eavg::engine::config::ConfigError;
use eavg::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Species(#[from] SpeciesError),

    #[error("Invalid --{axis} bounds: {source}")]
    Interval {
        axis: &'static str,
        #[source]
        source: IntervalError,
    },

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
