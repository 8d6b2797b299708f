use super::{PairPotential, PotentialSummary};
use crate::utils;

// Inverse squared separation above which a pair counts as overlapping;
// the pair energy there is above roughly 100 epsilon
const SR2_OVR: f64 = 1.77;

/// Lennard-Jones 12-6 potential, truncated at a cutoff, in reduced units
/// (sigma = 1, epsilon = 1)
#[derive(Clone, Copy, Debug)]
pub struct LJCut {
    r_cut: f64,
    pot_cut: f64, // pair energy at the cutoff before the factor 4, subtracted to shift
}
impl LJCut {
    pub fn new(r_cut: f64) -> Self {
        assert!(
            r_cut > 0.0,
            "Cutoff distance should be positive, found {}",
            r_cut,
        );
        let sr2 = 1.0 / (r_cut * r_cut);
        let sr6 = sr2 * sr2 * sr2;
        Self {
            r_cut,
            pot_cut: sr6 * sr6 - sr6,
        }
    }
}

impl PairPotential for LJCut {
    fn cutoff(&self) -> f64 {
        self.r_cut
    }
    fn compute(
        &self,
        box_length: f64,
        positions: &[[f64; 3]],
    ) -> (PotentialSummary, Vec<[f64; 3]>) {
        let n = positions.len();
        let r_cut_box_sq = (self.r_cut / box_length) * (self.r_cut / box_length);
        let box_sq = box_length * box_length;

        let mut total = PotentialSummary::default();
        let mut forces = vec![[0.0; 3]; n];

        for i in 0..n {
            for j in i + 1..n {
                // Separation of the closest periodic images, in box units
                let rij = [
                    utils::min_image(positions[i][0] - positions[j][0]),
                    utils::min_image(positions[i][1] - positions[j][1]),
                    utils::min_image(positions[i][2] - positions[j][2]),
                ];
                let rij_sq_box = utils::norm_squared(&rij);
                if rij_sq_box >= r_cut_box_sq {
                    continue;
                }

                let rij_sq = rij_sq_box * box_sq;
                let sr2 = 1.0 / rij_sq;
                total.ovr = total.ovr || sr2 > SR2_OVR;

                let sr6 = sr2 * sr2 * sr2;
                let sr12 = sr6 * sr6;
                let cut = sr12 - sr6;
                let vir = cut + sr12;

                total.cut += cut;
                total.pot += cut - self.pot_cut;
                total.vir += vir;
                total.lap += (22.0 * sr12 - 5.0 * sr6) * sr2;

                // f_ij = 24 (2 sr12 - sr6) sr2 * r_ij in physical units;
                // the factor 24 is applied once below
                let f_mag = vir * sr2 * box_length;
                for k in 0..3 {
                    forces[i][k] += rij[k] * f_mag;
                    forces[j][k] -= rij[k] * f_mag;
                }
            }
        }

        // Common numerical factors, applied once over the pair sums
        for force in &mut forces {
            for component in force {
                *component *= 24.0;
            }
        }
        total.cut *= 4.0;
        total.pot *= 4.0;
        total.vir *= 24.0 / 3.0;
        total.lap *= 24.0 * 2.0;

        (total, forces)
    }
}
