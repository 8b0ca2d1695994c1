mod defaults;
mod file;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use eavg::core::io::naming::filtered_tag;
use eavg::core::models::interval::{BoundingBox, Interval};
use eavg::core::models::species::parse_species_list;
use eavg::engine::config::{RunConfig, RunConfigBuilder};
use file::FileConfig;
use std::path::PathBuf;
use tracing::debug;

pub struct AppConfig {
    pub files: Vec<PathBuf>,
    pub run: RunConfig,
}

/// Resolves every setting as CLI flag, then config file, then built-in default.
///
/// Species tags and (when filtering) the three intervals are validated here,
/// so a bad value is reported before any snapshot is opened.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let species_list = cli
        .species
        .clone()
        .or(file_config.species)
        .unwrap_or(defaults.species);
    let species = parse_species_list(&species_list)?;

    let filter = cli.filter || file_config.filter.unwrap_or(defaults.filter);
    let summarize = cli.sum || file_config.sum.unwrap_or(defaults.sum);
    let base_tag = cli.tag.clone().or(file_config.tag).unwrap_or(defaults.tag);
    let output_dir = cli
        .output_dir
        .clone()
        .or(file_config.output_dir)
        .unwrap_or_else(|| PathBuf::from(defaults.output_dir));

    let (region, tag) = if filter {
        let dx = cli.dx.clone().or(file_config.dx).unwrap_or(defaults.dx);
        let dy = cli.dy.clone().or(file_config.dy).unwrap_or(defaults.dy);
        let dz = cli.dz.clone().or(file_config.dz).unwrap_or(defaults.dz);
        let region = BoundingBox::new(
            parse_axis("dx", &dx)?,
            parse_axis("dy", &dy)?,
            parse_axis("dz", &dz)?,
        );
        (Some(region), filtered_tag(&base_tag, &dx, &dy, &dz))
    } else {
        (None, base_tag)
    };

    let run = RunConfigBuilder::new()
        .species(species)
        .region(region)
        .summarize(summarize)
        .tag(tag)
        .output_dir(output_dir)
        .build()?;
    debug!("Resolved run configuration: {:?}", run);

    Ok(AppConfig {
        files: cli.files.clone(),
        run,
    })
}

fn parse_axis(axis: &'static str, value: &str) -> Result<Interval> {
    value
        .parse()
        .map_err(|source| CliError::Interval { axis, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eavg::core::models::species::{Species, SpeciesError};
    use eavg::engine::config::ConfigError;
    use std::fs;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["eavg"];
        full.extend_from_slice(args);
        Cli::parse_normalized(full)
    }

    #[test]
    fn defaults_apply_without_flags_or_file() {
        let app = build_config(&cli(&["a.h5", "b.h5"])).unwrap();

        assert_eq!(app.files, vec![PathBuf::from("a.h5"), PathBuf::from("b.h5")]);
        assert_eq!(
            app.run.species,
            vec![
                Species::HydrogenIon,
                Species::DihydrogenIon,
                Species::TrihydrogenIon
            ]
        );
        assert_eq!(app.run.region, None);
        assert!(!app.run.summarize);
        assert_eq!(app.run.tag, "");
        assert_eq!(app.run.output_dir, PathBuf::from("."));
    }

    #[test]
    fn filtering_uses_default_box_and_extends_the_tag() {
        let app = build_config(&cli(&["-F", "-t", "run", "a.h5"])).unwrap();

        assert_eq!(
            app.run.region,
            Some(BoundingBox::new(
                Interval::new(-7.0, 7.0),
                Interval::new(8.0, 9.5),
                Interval::new(164.0, 165.6),
            ))
        );
        assert_eq!(app.run.tag, "runx_-7.0_7.0_y_8_9.5_z_164.0_165.6");
    }

    #[test]
    fn legacy_axis_flags_set_the_box() {
        let app = build_config(&cli(&["-F", "-dx", "-1 1", "-dy", "0 2", "-dz", "3 4", "a.h5"]))
            .unwrap();

        assert_eq!(
            app.run.region,
            Some(BoundingBox::new(
                Interval::new(-1.0, 1.0),
                Interval::new(0.0, 2.0),
                Interval::new(3.0, 4.0),
            ))
        );
        assert_eq!(app.run.tag, "x_-1_1_y_0_2_z_3_4");
    }

    #[test]
    fn bounds_are_ignored_without_filter() {
        let app = build_config(&cli(&["-dx", "not numbers", "a.h5"])).unwrap();
        assert_eq!(app.run.region, None);
        assert_eq!(app.run.tag, "");
    }

    #[test]
    fn malformed_bounds_are_rejected_when_filtering() {
        let err = build_config(&cli(&["-F", "--dy", "1 2 3", "a.h5"])).err().unwrap();
        assert!(matches!(err, CliError::Interval { axis: "dy", .. }));
    }

    #[test]
    fn unknown_species_is_rejected() {
        let err = build_config(&cli(&["-s", "H+ He+", "a.h5"])).err().unwrap();
        assert!(matches!(err, CliError::Species(SpeciesError::UnknownTag(ref t)) if t == "He+"));
    }

    #[test]
    fn duplicate_species_is_rejected() {
        let err = build_config(&cli(&["-s", "e e", "a.h5"])).err().unwrap();
        assert!(matches!(
            err,
            CliError::Config(ConfigError::DuplicateSpecies(Species::Electron))
        ));
    }

    #[test]
    fn file_values_fill_in_and_cli_flags_win() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("eavg.toml");
        fs::write(
            &config_path,
            r#"
            species = "e"
            sum = true
            tag = "from_file"
            output-dir = "file_out"
            "#,
        )
        .unwrap();

        let app = build_config(&cli(&[
            "-c",
            config_path.to_str().unwrap(),
            "-t",
            "from_cli",
            "a.h5",
        ]))
        .unwrap();

        assert_eq!(app.run.species, vec![Species::Electron]);
        assert!(app.run.summarize);
        assert_eq!(app.run.tag, "from_cli");
        assert_eq!(app.run.output_dir, PathBuf::from("file_out"));
    }
}
