use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const PROTON_MASS_G: f64 = 1.67e-24;
const ELECTRON_MASS_G: f64 = 9.1e-28;

/// The particle kinds recognized by the energy reducer.
///
/// The set is closed: each variant has a fixed rest mass, and tags outside the
/// set fail to parse instead of falling back to a default mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Electron,       // e
    HydrogenIon,    // H+
    DihydrogenIon,  // H2+
    TrihydrogenIon, // H3+
}

static SPECIES_BY_TAG: Map<&'static str, Species> = phf_map! {
    "e" => Species::Electron,
    "H+" => Species::HydrogenIon,
    "H2+" => Species::DihydrogenIon,
    "H3+" => Species::TrihydrogenIon,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpeciesError {
    #[error("Unknown species tag '{0}' (expected one of: e, H+, H2+, H3+)")]
    UnknownTag(String),
}

impl Species {
    pub const ALL: [Species; 4] = [
        Species::Electron,
        Species::HydrogenIon,
        Species::DihydrogenIon,
        Species::TrihydrogenIon,
    ];

    /// Tag used for the species group inside snapshot files and in output names.
    pub fn tag(self) -> &'static str {
        match self {
            Species::Electron => "e",
            Species::HydrogenIon => "H+",
            Species::DihydrogenIon => "H2+",
            Species::TrihydrogenIon => "H3+",
        }
    }

    /// Rest mass in grams.
    pub fn mass_grams(self) -> f64 {
        match self {
            Species::Electron => ELECTRON_MASS_G,
            Species::HydrogenIon => PROTON_MASS_G,
            Species::DihydrogenIon => 2.0 * PROTON_MASS_G,
            Species::TrihydrogenIon => 3.0 * PROTON_MASS_G,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        SPECIES_BY_TAG.get(tag).copied()
    }
}

impl FromStr for Species {
    type Err = SpeciesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::from_tag(s).ok_or_else(|| SpeciesError::UnknownTag(s.to_string()))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parses a whitespace-separated species list such as `"H+ H2+ H3+"`.
pub fn parse_species_list(list: &str) -> Result<Vec<Species>, SpeciesError> {
    list.split_whitespace().map(str::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_round_trips_through_its_tag() {
        for species in Species::ALL {
            assert_eq!(species.tag().parse::<Species>(), Ok(species));
        }
    }

    #[test]
    fn masses_match_the_fixed_table() {
        assert_eq!(Species::Electron.mass_grams(), 9.1e-28);
        assert_eq!(Species::HydrogenIon.mass_grams(), 1.67e-24);
        assert_eq!(Species::DihydrogenIon.mass_grams(), 2.0 * 1.67e-24);
        assert_eq!(Species::TrihydrogenIon.mass_grams(), 3.0 * 1.67e-24);
    }

    #[test]
    fn unknown_tag_is_a_lookup_error() {
        assert_eq!(
            "O+".parse::<Species>(),
            Err(SpeciesError::UnknownTag("O+".to_string()))
        );
        assert!(Species::from_tag("h+").is_none());
    }

    #[test]
    fn parse_species_list_keeps_order_and_ignores_extra_whitespace() {
        let list = parse_species_list("  H3+ e   H+ ").unwrap();
        assert_eq!(
            list,
            vec![Species::TrihydrogenIon, Species::Electron, Species::HydrogenIon]
        );
    }

    #[test]
    fn parse_species_list_fails_on_first_unknown_tag() {
        let err = parse_species_list("H+ X- H2+").unwrap_err();
        assert_eq!(err, SpeciesError::UnknownTag("X-".to_string()));
    }

    #[test]
    fn display_uses_the_tag() {
        assert_eq!(Species::DihydrogenIon.to_string(), "H2+");
    }
}
