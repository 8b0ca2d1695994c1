use super::error::SnapshotError;
use super::traits::SnapshotFile;
use crate::core::models::particles::Column;
use hdf5::{File, Group};
use std::path::{Path, PathBuf};

const TIME_ATTR: &str = "time";
const PARTICLES_GROUP: &str = "particles";

/// A snapshot backed by an open, read-only HDF5 file.
///
/// The handle is closed when the value is dropped.
pub struct Hdf5Snapshot {
    path: PathBuf,
    file: File,
}

impl Hdf5Snapshot {
    pub fn open(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::open(path).map_err(|source| SnapshotError::Hdf5 {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    fn hdf5_error(&self, source: hdf5::Error) -> SnapshotError {
        SnapshotError::Hdf5 {
            path: self.path.clone(),
            source,
        }
    }

    fn particles(&self) -> Result<Group, SnapshotError> {
        self.file
            .group(PARTICLES_GROUP)
            .map_err(|e| self.hdf5_error(e))
    }
}

impl SnapshotFile for Hdf5Snapshot {
    fn path(&self) -> &Path {
        &self.path
    }

    fn time_seconds(&self) -> Result<f64, SnapshotError> {
        let names = self.file.attr_names().map_err(|e| self.hdf5_error(e))?;
        if !names.iter().any(|n| n == TIME_ATTR) {
            return Err(SnapshotError::MissingTime {
                path: self.path.clone(),
            });
        }

        // Scalar and one-element attributes are both accepted.
        let values: Vec<f64> = self
            .file
            .attr(TIME_ATTR)
            .and_then(|attr| attr.read_raw::<f64>())
            .map_err(|e| self.hdf5_error(e))?;
        values.first().copied().ok_or_else(|| SnapshotError::MissingTime {
            path: self.path.clone(),
        })
    }

    fn species_tags(&self) -> Result<Vec<String>, SnapshotError> {
        self.particles()?
            .member_names()
            .map_err(|e| self.hdf5_error(e))
    }

    fn read_column(&self, species: &str, column: Column) -> Result<Vec<f64>, SnapshotError> {
        let particles = self.particles()?;
        if !particles.link_exists(species) {
            return Err(SnapshotError::MissingSpecies {
                path: self.path.clone(),
                species: species.to_string(),
            });
        }

        let group = particles.group(species).map_err(|e| self.hdf5_error(e))?;
        if !group.link_exists(column.name()) {
            return Err(SnapshotError::MissingColumn {
                path: self.path.clone(),
                species: species.to_string(),
                column: column.name(),
            });
        }

        group
            .dataset(column.name())
            .and_then(|dataset| dataset.read_raw::<f64>())
            .map_err(|e| self.hdf5_error(e))
    }
}
