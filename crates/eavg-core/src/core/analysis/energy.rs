use crate::core::models::particles::ParticleTable;
use crate::core::models::species::{Species, SpeciesError};
use nalgebra::Vector3;
use thiserror::Error;

/// Conversion factor from erg to electron-volts.
pub const ERG_TO_EV: f64 = 6.242e11;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnergyError {
    #[error(transparent)]
    Species(#[from] SpeciesError),

    #[error("Total statistical weight of {particles} '{species}' particle(s) is zero")]
    ZeroTotalWeight { species: Species, particles: usize },
}

/// Non-relativistic kinetic energy in eV for a mass in grams and a velocity in cm/s.
#[inline]
pub fn kinetic_energy_ev(mass_grams: f64, velocity: &Vector3<f64>) -> f64 {
    0.5 * mass_grams * velocity.norm_squared() * ERG_TO_EV
}

/// Statistical-weight-averaged kinetic energy of `table`, in eV.
///
/// An empty table yields `0.0`, the "no data" value written to the series.
///
/// # Errors
///
/// Returns [`EnergyError::ZeroTotalWeight`] when the table has rows but their
/// weights sum to zero.
pub fn average_energy(species: Species, table: &ParticleTable) -> Result<f64, EnergyError> {
    if table.is_empty() {
        return Ok(0.0);
    }

    let mass = species.mass_grams();
    let (weighted_sum, total_weight) =
        (0..table.len()).fold((0.0, 0.0), |(energy_acc, weight_acc), row| {
            let weight = table.weight(row);
            let energy = kinetic_energy_ev(mass, &table.velocity(row));
            (energy_acc + energy * weight, weight_acc + weight)
        });

    if total_weight == 0.0 {
        return Err(EnergyError::ZeroTotalWeight {
            species,
            particles: table.len(),
        });
    }

    Ok(weighted_sum / total_weight)
}

/// Same as [`average_energy`] but resolves the species from its tag first.
///
/// # Errors
///
/// Fails with [`EnergyError::Species`] for a tag outside the mass table, even
/// when the table is empty.
pub fn average_energy_for_tag(tag: &str, table: &ParticleTable) -> Result<f64, EnergyError> {
    let species: Species = tag.parse()?;
    average_energy(species, table)
}
