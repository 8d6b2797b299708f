mod ljcut;
pub use ljcut::LJCut;

/// Aggregate totals from one force evaluation, recomputed every step and
/// never carried across steps
#[derive(Clone, Copy, Debug, Default)]
pub struct PotentialSummary {
    /// Cut-and-shifted potential energy (continuous at the cutoff)
    pub pot: f64,
    /// Potential truncated at the cutoff but not shifted; used with the
    /// long-range correction for full-energy estimators
    pub cut: f64,
    /// Virial, for the pressure beyond the ideal-gas term
    pub vir: f64,
    /// Sum of pair Laplacians, for the configurational temperature
    pub lap: f64,
    /// Whether any pair fell inside the overlap threshold
    pub ovr: bool,
}

/// Pairwise short-ranged potential evaluated over all minimum-image pairs
/// inside the cutoff.
///
/// `compute` is a pure function of its inputs: it borrows positions
/// (box-fraction units) and returns a fresh summary and per-atom force set
/// each call. Overlap is signalled in the summary, never raised, so the
/// caller decides whether to abort.
pub trait PairPotential {
    fn cutoff(&self) -> f64;
    fn compute(
        &self,
        box_length: f64,
        positions: &[[f64; 3]],
    ) -> (PotentialSummary, Vec<[f64; 3]>);
}
