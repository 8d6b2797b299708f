use crate::{lrc, utils, Atoms, PotentialSummary};

/// How an observable folds into block averages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Plain block and run mean
    Average,
    /// Within-block mean-square deviation, for fluctuation quantities such
    /// as heat capacities
    Msd,
}

/// A named instantaneous scalar, tagged with its averaging method
#[derive(Clone, Copy, Debug)]
pub struct Observable {
    pub name: &'static str,
    pub value: f64,
    pub method: Method,
}

/// Instantaneous thermodynamic observables from the current state and the
/// latest force evaluation.
///
/// The kinetic temperature uses 3N degrees of freedom: the thermostat does
/// not conserve momentum. The configurational temperature is an independent,
/// velocity-free estimator, useful as a consistency check.
pub fn observables(
    atoms: &Atoms,
    total: &PotentialSummary,
    forces: &[[f64; 3]],
    r_cut: f64,
    temperature: f64,
) -> Vec<Observable> {
    let n = atoms.num_atoms() as f64;
    let vol = atoms.volume();
    let rho = atoms.density();
    let kin = atoms.kinetic_energy();
    let fsq: f64 = forces.iter().map(utils::norm_squared).sum();

    vec![
        Observable {
            name: "E/N cut&shifted",
            value: (kin + total.pot) / n,
            method: Method::Average,
        },
        Observable {
            name: "P cut&shifted",
            value: rho * temperature + total.vir / vol,
            method: Method::Average,
        },
        Observable {
            name: "E/N full",
            value: lrc::potential(rho, r_cut) + (kin + total.cut) / n,
            method: Method::Average,
        },
        Observable {
            name: "P full",
            value: lrc::pressure(rho, r_cut) + rho * temperature + total.vir / vol,
            method: Method::Average,
        },
        Observable {
            name: "T kinetic",
            value: 2.0 * kin / (3.0 * n),
            method: Method::Average,
        },
        Observable {
            name: "T config",
            value: fsq / total.lap,
            method: Method::Average,
        },
        // Divided by temperature and sqrt(N) so the block variance comes out
        // intensive; the long-range correction does not contribute
        Observable {
            name: "Cv/N cut&shifted",
            value: (kin + total.pot) / (temperature * n.sqrt()),
            method: Method::Msd,
        },
        Observable {
            name: "Cv/N full",
            value: (kin + total.cut) / (temperature * n.sqrt()),
            method: Method::Msd,
        },
    ]
}
