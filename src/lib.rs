//! Brownian dynamics of Lennard-Jones atoms in the constant-NVT ensemble.
//!
//! Positions live in box-fraction units inside a cubic periodic box;
//! velocities stay in physical units and every atom has unit mass. The
//! dynamics is the BAOAB splitting of the Langevin equation, with block
//! averaging of the standard thermodynamic observables.

pub mod atoms;
pub mod averages;
pub mod cnf;
pub mod compute;
pub mod config;
pub mod error;
pub mod integrators;
pub mod lattice;
pub mod lrc;
pub mod potential;
pub mod simulation;
pub(crate) mod utils;

pub use atoms::Atoms;
pub use averages::Averages;
pub use compute::{Method, Observable};
pub use config::RunParameters;
pub use error::Error;
pub use integrators::{drift, kick, randomize, Baoab};
pub use potential::{LJCut, PairPotential, PotentialSummary};
pub use simulation::Simulation;
