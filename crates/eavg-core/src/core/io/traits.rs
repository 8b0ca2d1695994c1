use super::error::SnapshotError;
use super::json::JsonSnapshot;
use crate::core::models::particles::Column;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Seconds to nanoseconds, the time unit of every output series.
pub const SECONDS_TO_NS: f64 = 1e9;

/// Read access to one simulation snapshot.
///
/// A snapshot carries a root `time` attribute (seconds) and a `particles`
/// section with one group per species tag, each holding the seven columns
/// named by [`Column::name`]. Implementors own whatever handle the format
/// needs; dropping the value releases it.
pub trait SnapshotFile {
    /// The path the snapshot was opened from, for diagnostics.
    fn path(&self) -> &Path;

    /// Simulated time of the snapshot in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the attribute is missing or unreadable.
    fn time_seconds(&self) -> Result<f64, SnapshotError>;

    /// Tags of every species group present in the `particles` section.
    ///
    /// # Errors
    ///
    /// Returns an error if the `particles` section cannot be read.
    fn species_tags(&self) -> Result<Vec<String>, SnapshotError>;

    /// Reads one column of one species group in full.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::MissingSpecies`] or
    /// [`SnapshotError::MissingColumn`] when the group or dataset does not
    /// exist, or a format-specific error if reading fails.
    fn read_column(&self, species: &str, column: Column) -> Result<Vec<f64>, SnapshotError>;

    /// Simulated time of the snapshot in nanoseconds.
    fn time_ns(&self) -> Result<f64, SnapshotError> {
        Ok(self.time_seconds()? * SECONDS_TO_NS)
    }

    fn has_species(&self, species: &str) -> Result<bool, SnapshotError> {
        Ok(self.species_tags()?.iter().any(|tag| tag == species))
    }
}

/// Signature at the start of every HDF5 superblock.
pub const HDF5_SIGNATURE: [u8; 8] = *b"\x89HDF\r\n\x1a\n";

// The superblock sits at 0 or after a user block of 512, 1024, 2048, ... bytes.
const HDF5_FIRST_USERBLOCK: u64 = 512;
const JSON_SNIFF_LEN: u64 = 1024;

/// Container formats a snapshot can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Hdf5,
    Json,
}

impl SnapshotFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "h5" | "hdf5" | "hdf" => Some(SnapshotFormat::Hdf5),
            "json" => Some(SnapshotFormat::Json),
            _ => None,
        }
    }

    /// Identifies the format of the file at `path`.
    ///
    /// An HDF5 signature wins regardless of the file name. Otherwise the
    /// extension decides, and an extension-less file whose first
    /// non-blank byte is `{` is taken as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] if the file cannot be opened or read.
    pub fn detect(path: &Path) -> Result<Option<Self>, SnapshotError> {
        let io_error = |source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_error)?;
        let len = file.metadata().map_err(io_error)?.len();

        if has_hdf5_signature(&mut file, len).map_err(io_error)? {
            return Ok(Some(SnapshotFormat::Hdf5));
        }
        if let Some(format) = Self::from_extension(path) {
            return Ok(Some(format));
        }
        if starts_like_json(&mut file).map_err(io_error)? {
            return Ok(Some(SnapshotFormat::Json));
        }
        Ok(None)
    }
}

fn has_hdf5_signature<R: Read + Seek>(reader: &mut R, len: u64) -> io::Result<bool> {
    let mut buf = [0u8; 8];
    let mut offset = 0;
    while offset + HDF5_SIGNATURE.len() as u64 <= len {
        reader.seek(SeekFrom::Start(offset))?;
        reader.read_exact(&mut buf)?;
        if buf == HDF5_SIGNATURE {
            return Ok(true);
        }
        offset = if offset == 0 {
            HDF5_FIRST_USERBLOCK
        } else {
            offset * 2
        };
    }
    Ok(false)
}

fn starts_like_json<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    reader.seek(SeekFrom::Start(0))?;
    let mut head = Vec::new();
    reader.by_ref().take(JSON_SNIFF_LEN).read_to_end(&mut head)?;
    Ok(head
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'{'))
}

/// Opens a snapshot read-only, dispatching on the file content.
///
/// # Errors
///
/// Returns [`SnapshotError::UnsupportedFormat`] when the format cannot be
/// identified, [`SnapshotError::Hdf5Unavailable`] for HDF5 files in a build
/// without the `hdf5` feature, or the backend's error if the file cannot be
/// opened.
pub fn open_snapshot(path: &Path) -> Result<Box<dyn SnapshotFile>, SnapshotError> {
    match SnapshotFormat::detect(path)? {
        Some(SnapshotFormat::Json) => Ok(Box::new(JsonSnapshot::open(path)?)),
        Some(SnapshotFormat::Hdf5) => open_hdf5(path),
        None => Err(SnapshotError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(feature = "hdf5")]
fn open_hdf5(path: &Path) -> Result<Box<dyn SnapshotFile>, SnapshotError> {
    Ok(Box::new(super::h5::Hdf5Snapshot::open(path)?))
}

#[cfg(not(feature = "hdf5"))]
fn open_hdf5(path: &Path) -> Result<Box<dyn SnapshotFile>, SnapshotError> {
    Err(SnapshotError::Hdf5Unavailable {
        path: path.to_path_buf(),
    })
}
