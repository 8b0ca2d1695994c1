use crate::core::models::species::Species;

const FILE_PREFIX: &str = "E_avg";
const SUMMARY_LABEL: &str = "SUMMARIZED";
const FILE_EXTENSION: &str = "txt";

/// `E_avg_<species>_<tag>.txt`
pub fn series_file_name(species: Species, tag: &str) -> String {
    format!("{FILE_PREFIX}_{}_{tag}.{FILE_EXTENSION}", species.tag())
}

/// `E_avg_SUMMARIZED_<tag>.txt`
pub fn summary_file_name(tag: &str) -> String {
    format!("{FILE_PREFIX}_{SUMMARY_LABEL}_{tag}.{FILE_EXTENSION}")
}

/// Appends the filter bounds to `base` exactly as they were typed, then
/// replaces every space with an underscore.
///
/// `filtered_tag("run1", "0 1", "0 2", "0 3")` is `run1x_0_1_y_0_2_z_0_3`.
pub fn filtered_tag(base: &str, dx: &str, dy: &str, dz: &str) -> String {
    format!("{base}x_{dx}_y_{dy}_z_{dz}").replace(' ', "_")
}
