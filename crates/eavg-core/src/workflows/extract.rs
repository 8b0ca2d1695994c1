use crate::core::analysis::energy::average_energy;
use crate::core::analysis::filter::spatial_filter;
use crate::core::io::series::write_series_to_path;
use crate::core::io::traits::open_snapshot;
use crate::core::models::series::TimeSeries;
use crate::core::models::species::Species;
use crate::engine::config::RunConfig;
use crate::engine::error::EngineError;
use crate::engine::extraction::collect_particles;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::summary::summarize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Energy series produced by one run, one point per input file.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyReport {
    /// One series per configured species, in configuration order.
    pub per_species: Vec<(Species, TimeSeries)>,
    /// Present when the configuration asks for a summary.
    pub summary: Option<TimeSeries>,
}

impl EnergyReport {
    pub fn series_for(&self, species: Species) -> Option<&TimeSeries> {
        self.per_species
            .iter()
            .find(|(s, _)| *s == species)
            .map(|(_, series)| series)
    }
}

/// Reduces every snapshot in `files` to one average energy per species.
///
/// Files are processed in the given order; each one is opened once, read and
/// closed before the next. The first failure aborts the run.
#[instrument(skip_all, name = "extract_workflow", fields(files = files.len()))]
pub fn run<P: AsRef<Path>>(
    files: &[P],
    config: &RunConfig,
    reporter: &ProgressReporter,
) -> Result<EnergyReport, EngineError> {
    reporter.report(Progress::RunStart {
        total_files: files.len() as u64,
    });
    debug!(
        species = ?config.species,
        region = ?config.region,
        summarize = config.summarize,
        tag = %config.tag,
        "Starting extraction."
    );

    let mut per_species: Vec<(Species, TimeSeries)> = config
        .species
        .iter()
        .map(|&s| (s, TimeSeries::with_capacity(files.len())))
        .collect();

    for path in files {
        let path = path.as_ref();
        reporter.report(Progress::FileStart {
            path: path.to_path_buf(),
        });

        let snapshot = open_snapshot(path)?;
        let time_ns = snapshot.time_ns()?;
        info!(path = %path.display(), time_ns, "Processing snapshot.");

        for (species, series) in per_species.iter_mut() {
            let load = collect_particles(snapshot.as_ref(), species.tag())?;
            if load.is_absent() {
                reporter.report(Progress::Message(format!(
                    "{} not found in {}",
                    species,
                    path.display()
                )));
            }
            let table = load.into_table();
            let table = match &config.region {
                Some(region) => {
                    let kept = spatial_filter(&table, region);
                    debug!(
                        species = %species,
                        before = table.len(),
                        after = kept.len(),
                        "Applied spatial filter."
                    );
                    kept
                }
                None => table,
            };
            let energy = average_energy(*species, &table)?;
            debug!(species = %species, energy_ev = energy, "Reduced species energy.");
            series.push(time_ns, energy);
        }

        drop(snapshot);
        reporter.report(Progress::FileFinish);
    }

    let summary = config
        .summarize
        .then(|| summarize(per_species.iter().map(|(_, series)| series)));

    reporter.report(Progress::RunFinish);
    info!(files = files.len(), "Extraction complete.");
    Ok(EnergyReport {
        per_species,
        summary,
    })
}

/// Writes the summary (if any) and then every species series into
/// `config.output_dir`, returning the paths in write order.
pub fn write_report(report: &EnergyReport, config: &RunConfig) -> Result<Vec<PathBuf>, EngineError> {
    let mut written = Vec::with_capacity(report.per_species.len() + 1);

    if let Some(summary) = &report.summary {
        let path = config.summary_output_path();
        write_series_to_path(&path, summary)?;
        info!(path = %path.display(), "Wrote summary series.");
        written.push(path);
    }

    for (species, series) in &report.per_species {
        let path = config.species_output_path(*species);
        write_series_to_path(&path, series)?;
        info!(path = %path.display(), species = %species, "Wrote species series.");
        written.push(path);
    }

    Ok(written)
}
