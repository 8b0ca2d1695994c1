//! Snapshot input and time-series output.
//!
//! Snapshots are read through the [`traits::SnapshotFile`] trait so the
//! pipeline does not care which container format a dump was written in. The
//! format is detected by [`traits::open_snapshot`], from the HDF5 signature
//! first and the extension second: HDF5 (default `hdf5` cargo feature) or a
//! JSON document with the same `time` / `particles/<species>/<column>` layout.
//!
//! Results are written as tab-delimited text by [`series`], with file names
//! built by [`naming`].

pub mod error;
#[cfg(feature = "hdf5")]
pub mod h5;
pub mod json;
pub mod naming;
pub mod series;
pub mod traits;
