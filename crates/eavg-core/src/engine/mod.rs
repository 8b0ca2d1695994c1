//! # Engine Module
//!
//! Per-run machinery shared by the workflows: the run configuration, particle
//! extraction from open snapshots, the cross-species summary, progress
//! reporting and the aggregated error type.
//!
//! - **Configuration** ([`config`]) - [`config::RunConfig`] and its builder
//! - **Extraction** ([`extraction`]) - species lookup with an explicit absent outcome
//! - **Summary** ([`summary`]) - the combined series over all species
//! - **Progress Monitoring** ([`progress`]) - callback-based progress events
//! - **Error Handling** ([`error`]) - [`error::EngineError`]

pub mod config;
pub mod error;
pub mod extraction;
pub mod progress;
pub mod summary;
