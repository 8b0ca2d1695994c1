//! # Workflows Module
//!
//! Top-level entry points. A workflow takes input files and a
//! [`RunConfig`](crate::engine::config::RunConfig), drives the engine and
//! returns its results.
//!
//! - **Extraction Workflow** ([`extract`]) - per-species average kinetic
//!   energy over a sequence of snapshots, with optional spatial filtering and
//!   a cross-species summary.

pub mod extract;
