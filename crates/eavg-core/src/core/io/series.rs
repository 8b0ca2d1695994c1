use crate::core::models::series::TimeSeries;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Header written as the first line of every series file.
pub const SERIES_HEADER: [&str; 2] = ["# time, ns", "Energy, eV"];

#[derive(Debug, Error)]
pub enum SeriesWriteError {
    #[error("Failed to create '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write series to '{path}': {source}", path = path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Formats like C's `%.6e`: six mantissa digits and a signed, at least
/// two-digit exponent (`1.500000e+02`).
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{value:.6e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.abs())
        }
        None => formatted,
    }
}

/// Writes the header and one tab-separated `time<TAB>energy` row per point.
pub fn write_series<W: Write>(writer: W, series: &TimeSeries) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(SERIES_HEADER)?;
    for point in series {
        wtr.write_record([
            format_scientific(point.time_ns),
            format_scientific(point.energy_ev),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes `series` to it.
pub fn write_series_to_path(path: &Path, series: &TimeSeries) -> Result<(), SeriesWriteError> {
    let file = File::create(path).map_err(|source| SeriesWriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_series(BufWriter::new(file), series).map_err(|source| SeriesWriteError::Csv {
        path: path.to_path_buf(),
        source,
    })
}
