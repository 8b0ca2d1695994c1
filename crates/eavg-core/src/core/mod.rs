//! # Core Module
//!
//! Stateless building blocks of the energy extraction pipeline.
//!
//! - **Data model** ([`models`]) - species, particle tables, intervals and time series
//! - **Computation** ([`analysis`]) - range and spatial filters, the weighted energy
//!   reducer, histogram-to-polyline conversion
//! - **File I/O** ([`io`]) - snapshot readers, the tab-delimited series writer and
//!   output naming rules

pub mod analysis;
pub mod io;
pub mod models;
