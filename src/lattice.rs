use rand::Rng;

use crate::Atoms;

/// Simple-cubic lattice used to seed initial configurations
#[derive(Debug)]
pub struct Cubic {
    a: f64,
}
impl Cubic {
    pub fn new(a: f64) -> Self {
        let lattice = Self { a };
        lattice.assert_positive();
        lattice
    }
    pub fn from_density(rho: f64) -> Self {
        let lattice = Self {
            a: (1.0 / rho).cbrt(),
        };
        lattice.assert_positive();
        lattice
    }
    fn assert_positive(&self) {
        assert!(
            self.a > 0.0,
            "Lattice constant should be positive, found {}",
            self.a
        );
    }

    pub fn cell_length(&self) -> f64 {
        self.a
    }

    /// The first `num_atoms` lattice sites of a cube holding at least that
    /// many, centered on cell midpoints, in physical units
    pub fn coords(&self, num_atoms: usize) -> Vec<[f64; 3]> {
        let mut ncell = 1usize;
        while ncell * ncell * ncell < num_atoms {
            ncell += 1;
        }
        let mut coords = Vec::with_capacity(num_atoms);
        'fill: for i in 0..ncell {
            for j in 0..ncell {
                for k in 0..ncell {
                    if coords.len() == num_atoms {
                        break 'fill;
                    }
                    coords.push([
                        self.a * (i as f64 + 0.5),
                        self.a * (j as f64 + 0.5),
                        self.a * (k as f64 + 0.5),
                    ]);
                }
            }
        }
        coords
    }

    /// The box edge enclosing `num_atoms` sites at this spacing
    pub fn box_length(&self, num_atoms: usize) -> f64 {
        let mut ncell = 1usize;
        while ncell * ncell * ncell < num_atoms {
            ncell += 1;
        }
        self.a * ncell as f64
    }
}

/// Build an equilibration-ready configuration: atoms on a simple-cubic
/// lattice at the given density with Maxwell-Boltzmann velocities
pub fn bootstrap(
    num_atoms: usize,
    density: f64,
    temperature: f64,
    rng: &mut impl Rng,
) -> Atoms {
    let lattice = Cubic::from_density(density);
    let box_length = lattice.box_length(num_atoms);
    let positions = lattice.coords(num_atoms);
    let velocities = vec![[0.0; 3]; num_atoms];
    let mut atoms = Atoms::from_physical(box_length, positions, velocities);
    atoms.set_temperature(temperature, rng);
    atoms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn coords_fill_the_requested_count() {
        let lattice = Cubic::new(1.2);
        assert_eq!(lattice.coords(27).len(), 27);
        assert_eq!(lattice.coords(10).len(), 10);
        assert_eq!(lattice.box_length(27), 1.2 * 3.0);
        assert_eq!(lattice.box_length(28), 1.2 * 4.0);
    }

    #[test]
    fn neighboring_sites_are_one_cell_apart() {
        let lattice = Cubic::from_density(0.5);
        let coords = lattice.coords(8);
        let a = lattice.cell_length();
        let mut min_sq = f64::MAX;
        for i in 0..coords.len() {
            for j in i + 1..coords.len() {
                let d = [
                    coords[i][0] - coords[j][0],
                    coords[i][1] - coords[j][1],
                    coords[i][2] - coords[j][2],
                ];
                min_sq = min_sq.min(utils::norm_squared(&d));
            }
        }
        assert!((min_sq.sqrt() - a).abs() < 1e-12);
    }

    #[test]
    fn bootstrap_produces_a_wrapped_thermal_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let atoms = bootstrap(27, 0.5, 1.0, &mut rng);
        assert_eq!(atoms.num_atoms(), 27);
        assert!((atoms.density() - 0.5).abs() < 1e-12);
        for position in &atoms.positions {
            for coord in position {
                assert!((-0.5..0.5).contains(coord));
            }
        }
        assert!(atoms.kinetic_energy() > 0.0);
    }
}
