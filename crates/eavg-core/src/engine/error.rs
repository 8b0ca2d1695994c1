use thiserror::Error;

use super::config::ConfigError;
use crate::core::analysis::energy::EnergyError;
use crate::core::io::error::SnapshotError;
use crate::core::io::series::SeriesWriteError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("Energy reduction failed: {source}")]
    Energy {
        #[from]
        source: EnergyError,
    },

    #[error(transparent)]
    Output(#[from] SeriesWriteError),
}
