use crate::core::io::naming::{series_file_name, summary_file_name};
use crate::core::models::interval::BoundingBox;
use crate::core::models::species::Species;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Species list is empty")]
    EmptySpeciesList,

    #[error("Species '{0}' is listed more than once")]
    DuplicateSpecies(Species),
}

/// Everything a single extraction run needs besides the input files.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Species to process, in output order.
    pub species: Vec<Species>,
    /// Spatial filter; `None` keeps every particle.
    pub region: Option<BoundingBox>,
    /// Emit the cross-species summary series.
    pub summarize: bool,
    /// Suffix used in every output file name.
    pub tag: String,
    pub output_dir: PathBuf,
}

impl RunConfig {
    pub fn species_output_path(&self, species: Species) -> PathBuf {
        self.output_dir.join(series_file_name(species, &self.tag))
    }

    pub fn summary_output_path(&self) -> PathBuf {
        self.output_dir.join(summary_file_name(&self.tag))
    }
}

#[derive(Default)]
pub struct RunConfigBuilder {
    species: Option<Vec<Species>>,
    region: Option<BoundingBox>,
    summarize: Option<bool>,
    tag: Option<String>,
    output_dir: Option<PathBuf>,
}

impl RunConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn species(mut self, species: Vec<Species>) -> Self {
        self.species = Some(species);
        self
    }
    pub fn region(mut self, region: Option<BoundingBox>) -> Self {
        self.region = region;
        self
    }
    pub fn summarize(mut self, summarize: bool) -> Self {
        self.summarize = Some(summarize);
        self
    }
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    /// Only `species` is required; the summary is off, the tag empty and the
    /// output directory `.` unless set.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let species = self
            .species
            .ok_or(ConfigError::MissingParameter("species"))?;
        if species.is_empty() {
            return Err(ConfigError::EmptySpeciesList);
        }
        let mut seen = HashSet::with_capacity(species.len());
        for &s in &species {
            if !seen.insert(s) {
                return Err(ConfigError::DuplicateSpecies(s));
            }
        }

        Ok(RunConfig {
            species,
            region: self.region,
            summarize: self.summarize.unwrap_or(false),
            tag: self.tag.unwrap_or_default(),
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}
