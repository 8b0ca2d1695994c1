use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional settings read from a `--config` TOML file.
///
/// ```toml
/// species = "H+ H2+"
/// filter = true
/// sum = true
/// dx = "-7.0 7.0"
/// dy = "8 9.5"
/// dz = "164.0 165.6"
/// tag = "run42"
/// output-dir = "results"
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub species: Option<String>,
    pub filter: Option<bool>,
    pub sum: Option<bool>,
    pub dx: Option<String>,
    pub dy: Option<String>,
    pub dz: Option<String>,
    pub tag: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}
