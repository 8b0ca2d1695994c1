//! # eavg Core Library
//!
//! Post-processing of particle-in-cell simulation dumps: extracts per-species
//! particles from snapshot files, optionally restricts them to a spatial region,
//! and reduces each snapshot to a statistical-weight-averaged kinetic energy.
//!
//! ## Layers
//!
//! - **[`core`]: Data and pure computation.** Species and their rest masses,
//!   the seven-column particle table, range/spatial filters, the energy reducer,
//!   histogram helpers, and the snapshot/series file formats.
//!
//! - **[`engine`]: Run plumbing.** The run configuration, the particle loader,
//!   the cross-species summary and progress reporting.
//!
//! - **[`workflows`]: The public entry point.** [`workflows::extract`] walks a
//!   list of snapshot files and produces one energy time series per species,
//!   plus the optional summary, and writes them to disk.

pub mod core;
pub mod engine;
pub mod workflows;
