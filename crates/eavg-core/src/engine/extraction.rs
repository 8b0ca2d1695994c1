use crate::core::io::error::SnapshotError;
use crate::core::io::traits::{SnapshotFile, open_snapshot};
use crate::core::models::particles::{Column, ParticleTable};
use std::path::Path;
use tracing::{debug, warn};

/// Result of looking a species up in one snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeciesLoad {
    /// The snapshot has no group for the species.
    Absent,
    Present(ParticleTable),
}

impl SpeciesLoad {
    pub fn is_absent(&self) -> bool {
        matches!(self, SpeciesLoad::Absent)
    }

    /// An absent species becomes a zero-row table.
    pub fn into_table(self) -> ParticleTable {
        match self {
            SpeciesLoad::Absent => ParticleTable::empty(),
            SpeciesLoad::Present(table) => table,
        }
    }
}

/// Reads every column of `species` from an already-open snapshot.
///
/// A missing species group is logged and reported as [`SpeciesLoad::Absent`];
/// a missing or short column in a present group is an error.
pub fn collect_particles(
    snapshot: &dyn SnapshotFile,
    species: &str,
) -> Result<SpeciesLoad, SnapshotError> {
    if !snapshot.has_species(species)? {
        warn!(
            species,
            path = %snapshot.path().display(),
            "Species not found in snapshot; treating it as empty."
        );
        return Ok(SpeciesLoad::Absent);
    }

    let mut columns: [Vec<f64>; 7] = Default::default();
    for column in Column::ALL {
        columns[column.index()] = snapshot.read_column(species, column)?;
    }

    let table = ParticleTable::from_columns(columns).map_err(|source| {
        SnapshotError::InconsistentColumns {
            path: snapshot.path().to_path_buf(),
            species: species.to_string(),
            source,
        }
    })?;
    debug!(species, particles = table.len(), "Loaded particle group.");
    Ok(SpeciesLoad::Present(table))
}

/// Opens `path`, reads one species and closes the file again.
pub fn load_particles(path: &Path, species: &str) -> Result<SpeciesLoad, SnapshotError> {
    let snapshot = open_snapshot(path)?;
    collect_particles(snapshot.as_ref(), species)
}
