use crate::core::models::particles::TableError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error for '{path}': {source}", path = path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[cfg(feature = "hdf5")]
    #[error("HDF5 error for '{path}': {source}", path = path.display())]
    Hdf5 {
        path: PathBuf,
        #[source]
        source: hdf5::Error,
    },

    #[error(
        "Unsupported snapshot format for '{path}' (not HDF5, and no .h5, .hdf5, .hdf or .json extension)",
        path = path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    #[error(
        "'{path}' is an HDF5 snapshot but this build has no HDF5 support (rebuild with the `hdf5` feature)",
        path = path.display()
    )]
    Hdf5Unavailable { path: PathBuf },

    #[error("Snapshot '{path}' has no 'time' attribute", path = path.display())]
    MissingTime { path: PathBuf },

    #[error("Snapshot '{path}' has no particle group '{species}'", path = path.display())]
    MissingSpecies { path: PathBuf, species: String },

    #[error(
        "Particle group '{species}' in '{path}' has no '{column}' column",
        path = path.display()
    )]
    MissingColumn {
        path: PathBuf,
        species: String,
        column: &'static str,
    },

    #[error(
        "Particle group '{species}' in '{path}' has inconsistent columns: {source}",
        path = path.display()
    )]
    InconsistentColumns {
        path: PathBuf,
        species: String,
        #[source]
        source: TableError,
    },
}
