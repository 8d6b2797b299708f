use tracing::info;

use crate::{
    averages::{self, Averages},
    cnf, compute, Atoms, Baoab, Error, Observable, PairPotential, PotentialSummary,
};

/// The integrator driver: owns the simulation state for the whole run and
/// sequences the block/step loop.
///
/// Per step: B(dt/2) with the previous forces, A(dt/2), O(dt), A(dt/2),
/// force recomputation with a fatal overlap check, B(dt/2) with the new
/// forces, then observables into the block accumulators. At each block
/// boundary the block statistics are closed and a checkpoint snapshot is
/// written in physical units.
pub struct Simulation<P: PairPotential> {
    pub atoms: Atoms,
    potential: P,
    integrator: Baoab,
    forces: Vec<[f64; 3]>,
    total: PotentialSummary,
    cnf_prefix: String,
}
impl<P: PairPotential> Simulation<P> {
    /// Create a simulation, evaluating initial forces.
    ///
    /// Fails if the initial configuration already contains an overlapping
    /// pair; a run must not start from an invalid trajectory.
    pub fn new(
        atoms: Atoms,
        potential: P,
        integrator: Baoab,
        cnf_prefix: &str,
    ) -> Result<Self, Error> {
        let (total, forces) = potential.compute(atoms.box_length(), &atoms.positions);
        if total.ovr {
            return Err(Error::Overlap { context: "initial" });
        }
        Ok(Self {
            atoms,
            potential,
            integrator,
            forces,
            total,
            cnf_prefix: String::from(cnf_prefix),
        })
    }

    // Getters
    pub fn potential(&self) -> &P {
        &self.potential
    }
    pub fn forces(&self) -> &Vec<[f64; 3]> {
        &self.forces
    }
    pub fn total(&self) -> &PotentialSummary {
        &self.total
    }

    fn observables(&self) -> Vec<Observable> {
        compute::observables(
            &self.atoms,
            &self.total,
            &self.forces,
            self.potential.cutoff(),
            self.integrator.temperature(),
        )
    }

    fn checkpoint_path(&self, blk: usize) -> String {
        // Numbered by block, saturating at "sav" past three digits
        if blk < 1000 {
            format!("{}{:03}", self.cnf_prefix, blk)
        } else {
            format!("{}sav", self.cnf_prefix)
        }
    }

    fn write_snapshot(&self, path: &str) -> Result<(), Error> {
        cnf::write_cnf_atoms(
            path,
            self.atoms.box_length(),
            &self.atoms.positions_physical(),
            &self.atoms.velocities,
        )
    }

    /// Run `nblock` blocks of `nstep` steps each, then write the final
    /// configuration to `{prefix}out`
    pub fn run(&mut self, nblock: usize, nstep: usize) -> Result<(), Error> {
        averages::log_instant("Initial values", &self.observables());
        let mut averages = Averages::run_begin(&self.observables());

        for blk in 1..=nblock {
            averages.blk_begin();
            for _stp in 0..nstep {
                self.total =
                    self.integrator
                        .step(&mut self.atoms, &self.potential, &mut self.forces)?;
                averages.blk_add(&self.observables());
            }
            averages.blk_end(blk);
            self.write_snapshot(&self.checkpoint_path(blk))?;
        }
        averages.run_end();

        // Final force evaluation and overlap check on the closing state
        let (total, forces) = self
            .potential
            .compute(self.atoms.box_length(), &self.atoms.positions);
        if total.ovr {
            return Err(Error::Overlap { context: "final" });
        }
        self.total = total;
        self.forces = forces;

        averages::log_instant("Final values", &self.observables());
        let out_path = format!("{}out", self.cnf_prefix);
        self.write_snapshot(&out_path)?;
        info!("Final configuration written to {}", out_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LJCut;

    #[test]
    fn overlapping_initial_configuration_is_rejected() {
        let atoms = Atoms::from_physical(
            10.0,
            vec![[0.0, 0.0, 0.0], [0.4, 0.0, 0.0]],
            vec![[0.0; 3]; 2],
        );
        let result = Simulation::new(
            atoms,
            LJCut::new(2.5),
            Baoab::with_seed(0.005, 1.0, 1.0, 9),
            "cnf.",
        );
        assert!(matches!(result, Err(Error::Overlap { context: "initial" })));
    }

    #[test]
    fn new_simulation_holds_initial_forces() {
        let atoms = Atoms::from_physical(
            10.0,
            vec![[0.0, 0.0, 0.0], [1.2, 0.0, 0.0]],
            vec![[0.0; 3]; 2],
        );
        let sim = Simulation::new(
            atoms,
            LJCut::new(2.5),
            Baoab::with_seed(0.005, 1.0, 1.0, 9),
            "cnf.",
        )
        .expect("no overlap");
        assert_eq!(sim.forces().len(), 2);
        assert!(sim.forces()[0][0].abs() > 0.0);
        assert!(!sim.total().ovr);
    }
}
