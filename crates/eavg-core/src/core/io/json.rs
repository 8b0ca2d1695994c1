use super::error::SnapshotError;
use super::traits::SnapshotFile;
use crate::core::models::particles::Column;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

type SpeciesGroup = BTreeMap<String, Vec<f64>>;

/// On-disk layout:
///
/// ```json
/// {
///   "time": 1.5e-9,
///   "particles": {
///     "H+": { "x": [..], "y": [..], "z": [..], "Vx": [..], "Vy": [..], "Vz": [..], "w": [..] }
///   }
/// }
/// ```
#[derive(Debug, Deserialize)]
struct JsonDocument {
    time: Option<f64>,
    particles: BTreeMap<String, SpeciesGroup>,
}

/// A snapshot stored as a single JSON document.
///
/// The document is parsed in full on open and the file handle is released
/// before [`JsonSnapshot::open`] returns.
#[derive(Debug)]
pub struct JsonSnapshot {
    path: PathBuf,
    time: Option<f64>,
    particles: BTreeMap<String, SpeciesGroup>,
}

impl JsonSnapshot {
    pub fn open(path: &Path) -> Result<Self, SnapshotError> {
        let file = File::open(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: JsonDocument =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                SnapshotError::Json {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            time: document.time,
            particles: document.particles,
        })
    }
}

impl SnapshotFile for JsonSnapshot {
    fn path(&self) -> &Path {
        &self.path
    }

    fn time_seconds(&self) -> Result<f64, SnapshotError> {
        self.time.ok_or_else(|| SnapshotError::MissingTime {
            path: self.path.clone(),
        })
    }

    fn species_tags(&self) -> Result<Vec<String>, SnapshotError> {
        Ok(self.particles.keys().cloned().collect())
    }

    fn read_column(&self, species: &str, column: Column) -> Result<Vec<f64>, SnapshotError> {
        let group = self
            .particles
            .get(species)
            .ok_or_else(|| SnapshotError::MissingSpecies {
                path: self.path.clone(),
                species: species.to_string(),
            })?;
        group
            .get(column.name())
            .cloned()
            .ok_or_else(|| SnapshotError::MissingColumn {
                path: self.path.clone(),
                species: species.to_string(),
                column: column.name(),
            })
    }
}
