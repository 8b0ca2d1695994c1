//! Pure computations over particle tables and histograms.
//!
//! - [`filter`] - Strict range masks and the three-axis spatial filter
//! - [`energy`] - Statistical-weight-averaged kinetic energy per species
//! - [`histogram`] - Step-plot point sequences for binned data

pub mod energy;
pub mod filter;
pub mod histogram;
