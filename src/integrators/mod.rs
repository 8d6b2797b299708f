mod baoab;
pub use baoab::Baoab;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::Atoms;

/// A: drift propagator.
///
/// Advances each fractional position by the physical velocity over time `t`,
/// dividing by the box length because positions are stored in box units,
/// then re-wraps by the minimum image.
pub fn drift(t: f64, atoms: &mut Atoms) {
    let box_length = atoms.box_length();
    for (position, velocity) in atoms.positions.iter_mut().zip(&atoms.velocities) {
        for k in 0..3 {
            position[k] += t * velocity[k] / box_length;
        }
    }
    atoms.wrap();
}

/// B: kick propagator. `velocity += t * force` for every atom (unit mass)
pub fn kick(t: f64, atoms: &mut Atoms, forces: &[[f64; 3]]) {
    for (velocity, force) in atoms.velocities.iter_mut().zip(forces) {
        for k in 0..3 {
            velocity[k] += t * force[k];
        }
    }
}

/// O: friction and noise propagator, the exact Ornstein-Uhlenbeck solution
/// for unit mass over time `t`.
///
/// For gamma*t below 1e-4 the variance factor 1 - exp(-2x) is evaluated with
/// a fourth-order expansion in x; the direct form loses significant digits
/// to cancellation there.
pub fn randomize(t: f64, temperature: f64, gamma: f64, atoms: &mut Atoms, rng: &mut impl Rng) {
    let x = gamma * t;
    let c = if x > 1e-4 {
        1.0 - (-2.0 * x).exp()
    } else {
        // 2x - 2x^2 + (4/3)x^3 - (2/3)x^4
        (((-2.0 / 3.0 * x + 4.0 / 3.0) * x - 2.0) * x + 2.0) * x
    };
    let noise_scale = (c * temperature).sqrt();
    let decay = (-x).exp();
    for velocity in &mut atoms.velocities {
        for component in velocity {
            let xi: f64 = rng.sample(StandardNormal);
            *component = *component * decay + noise_scale * xi;
        }
    }
}
