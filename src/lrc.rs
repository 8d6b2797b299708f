//! Long-range corrections for the Lennard-Jones potential, assuming uniform
//! density beyond the cutoff.

use std::f64::consts::PI;

/// Correction to the potential energy per atom
pub fn potential(density: f64, r_cut: f64) -> f64 {
    let sr3 = 1.0 / (r_cut * r_cut * r_cut);
    PI * ((8.0 / 9.0) * sr3.powi(3) - (8.0 / 3.0) * sr3) * density
}

/// Correction to the pressure
pub fn pressure(density: f64, r_cut: f64) -> f64 {
    let sr3 = 1.0 / (r_cut * r_cut * r_cut);
    PI * ((32.0 / 9.0) * sr3.powi(3) - (16.0 / 3.0) * sr3) * density * density
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_forms_at_unit_cutoff() {
        // sr3 = 1 there, so both corrections reduce to -16 pi / 9
        assert!((potential(1.0, 1.0) + 16.0 * PI / 9.0).abs() < 1e-14);
        assert!((pressure(1.0, 1.0) + 16.0 * PI / 9.0).abs() < 1e-14);
    }

    #[test]
    fn corrections_are_attractive_and_vanish_with_the_cutoff() {
        assert!(potential(0.75, 2.5) < 0.0);
        assert!(pressure(0.75, 2.5) < 0.0);
        assert!(potential(0.75, 100.0).abs() < 1e-4);
        assert!(pressure(0.75, 100.0).abs() < 1e-4);
    }
}
