//! Brownian dynamics, constant-NVT ensemble.
//!
//! Reads run parameters as JSON from a file or standard input (`{}` accepts
//! all defaults), reads the initial configuration from `{prefix}inp` or
//! seeds one on a cubic lattice, runs the BAOAB block/step loop, and writes
//! the final configuration to `{prefix}out`.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use bdmd::{cnf, lattice, Atoms, Baoab, Error, LJCut, RunParameters, Simulation};

#[derive(Parser)]
#[command(name = "bd_nvt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Brownian dynamics of Lennard-Jones atoms, constant-NVT ensemble")]
struct Cli {
    /// Parameters JSON file; reads standard input when omitted
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Configuration file prefix: input {prefix}inp, checkpoints
    /// {prefix}NNN, output {prefix}out
    #[arg(long, default_value = "cnf.")]
    cnf_prefix: String,

    /// Seed for the thermostat random generator; non-deterministic when
    /// omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Skip {prefix}inp and start this many atoms on a cubic lattice
    #[arg(long)]
    bootstrap: Option<usize>,

    /// Number density for --bootstrap
    #[arg(long, default_value_t = 0.75)]
    density: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn read_params(cli: &Cli) -> Result<RunParameters, Error> {
    let text = match &cli.params {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    RunParameters::from_json(&text)
}

fn load_atoms(cli: &Cli, params: &RunParameters, seed: u64) -> Result<Atoms, Error> {
    if let Some(num_atoms) = cli.bootstrap {
        info!("Seeding {} atoms on a cubic lattice", num_atoms);
        let mut rng = StdRng::seed_from_u64(seed);
        return Ok(lattice::bootstrap(
            num_atoms,
            cli.density,
            params.temperature,
            &mut rng,
        ));
    }
    let inp_path = format!("{}inp", cli.cnf_prefix);
    let (n, box_length, positions, velocities) = cnf::read_cnf_atoms(&inp_path)?;
    info!("{:<40}{:>15}", "Number of particles", n);
    Ok(Atoms::from_physical(box_length, positions, velocities))
}

fn run(cli: &Cli) -> Result<(), Error> {
    info!("bd_nvt");
    info!("Brownian dynamics, constant-NVT ensemble");
    info!("Particle mass=1 throughout");

    let params = read_params(cli)?;
    info!("{:<40}{:>15}", "Number of blocks", params.nblock);
    info!("{:<40}{:>15}", "Number of steps per block", params.nstep);
    info!("{:<40}{:>15.6}", "Potential cutoff distance", params.r_cut);
    info!("{:<40}{:>15.6}", "Time step", params.dt);
    info!("{:<40}{:>15.6}", "Friction coefficient", params.gamma);
    info!("{:<40}{:>15.6}", "Specified temperature", params.temperature);
    if params.gamma > 0.0 {
        info!(
            "{:<40}{:>15.6}",
            "Ideal diffusion coefft",
            params.temperature / params.gamma
        );
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    let atoms = load_atoms(cli, &params, seed)?;
    info!("{:<40}{:>15.6}", "Box length", atoms.box_length());
    info!("{:<40}{:>15.6}", "Density", atoms.density());

    let integrator = Baoab::with_seed(params.dt, params.temperature, params.gamma, seed);
    let mut simulation = Simulation::new(
        atoms,
        LJCut::new(params.r_cut),
        integrator,
        &cli.cnf_prefix,
    )?;
    simulation.run(params.nblock, params.nstep)
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("logging already initialized");
    }

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
