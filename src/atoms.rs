use rand::Rng;
use rand_distr::Distribution;

use crate::utils;

/// Atom positions and velocities in a cubic periodic box.
///
/// Positions are stored in box-fraction units and kept wrapped to
/// [-0.5, 0.5) by the minimum-image convention. Velocities stay in physical
/// units; all atoms have unit mass.
#[derive(Clone, Debug)]
pub struct Atoms {
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    box_length: f64,
}
impl Atoms {
    /// Create from physical-unit positions, dividing by the box length once
    pub fn from_physical(
        box_length: f64,
        positions: Vec<[f64; 3]>,
        velocities: Vec<[f64; 3]>,
    ) -> Self {
        assert!(
            box_length > 0.0,
            "Box length should be positive, found {}",
            box_length,
        );
        assert_eq!(
            positions.len(),
            velocities.len(),
            "Position and velocity counts should match",
        );
        let positions = positions
            .iter()
            .map(|r| {
                [
                    r[0] / box_length,
                    r[1] / box_length,
                    r[2] / box_length,
                ]
            })
            .collect();
        let mut atoms = Self {
            positions,
            velocities,
            box_length,
        };
        atoms.wrap();
        atoms
    }

    // Getters
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }
    pub fn box_length(&self) -> f64 {
        self.box_length
    }
    pub fn volume(&self) -> f64 {
        self.box_length * self.box_length * self.box_length
    }
    pub fn density(&self) -> f64 {
        self.num_atoms() as f64 / self.volume()
    }
    /// Positions multiplied back to physical units, for snapshot output
    pub fn positions_physical(&self) -> Vec<[f64; 3]> {
        self.positions
            .iter()
            .map(|r| {
                [
                    r[0] * self.box_length,
                    r[1] * self.box_length,
                    r[2] * self.box_length,
                ]
            })
            .collect()
    }

    /// Re-wrap every coordinate into [-0.5, 0.5)
    pub fn wrap(&mut self) {
        for position in &mut self.positions {
            for coord in position {
                *coord = utils::min_image(*coord);
            }
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self
            .velocities
            .iter()
            .map(utils::norm_squared)
            .sum::<f64>()
    }

    /// Draw Maxwell-Boltzmann velocities at the given temperature
    pub fn set_temperature(&mut self, temperature: f64, rng: &mut impl Rng) {
        let dist = rand_distr::Normal::new(0.0, temperature.sqrt())
            .expect("Invalid temperature");
        for velocity in &mut self.velocities {
            for component in velocity {
                *component = dist.sample(rng);
            }
        }
    }
}
