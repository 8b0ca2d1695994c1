//! # Core Models Module
//!
//! Plain data types shared by every stage of the pipeline.
//!
//! - [`species`] - The closed set of particle species and their rest masses
//! - [`particles`] - The seven-column particle table (`x, y, z, Vx, Vy, Vz, w`)
//! - [`interval`] - Open intervals and the three-axis bounding box
//! - [`series`] - Energy time series accumulated across snapshots

pub mod interval;
pub mod particles;
pub mod series;
pub mod species;
