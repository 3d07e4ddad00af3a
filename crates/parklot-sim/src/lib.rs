//! Scenario harness for parklot: lot generation, algorithm comparison and
//! console reporting.

pub mod config;
pub mod error;
pub mod harness;
pub mod lotgen;
pub mod report;
pub mod scenario;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

pub use config::SimConfig;
pub use error::{ConfigError, ScenarioError};
pub use harness::{Comparison, compare, run_scenario};
pub use lotgen::{LotGen, Occupancy};
pub use scenario::{Scenario, ScenarioSpec};

/// The config's seed, or a fresh one from the thread RNG.
pub fn resolve_seed(config: &SimConfig) -> u64 {
    config.seed.unwrap_or_else(|| rand::rng().random())
}

/// Build every scenario of `config` from `seed`, compare its algorithms and
/// write the reports to `out`.
pub fn run(config: &SimConfig, seed: u64, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("lot generation seed: {seed} (set {} to replay)", config::SEED_ENV);
    let mut lotgen = LotGen::new(StdRng::seed_from_u64(seed));
    for spec in &config.scenarios {
        let scenario = spec.build(&mut lotgen)?;
        let comparisons = run_scenario(&scenario, &config.algorithms)?;
        report::write_scenario(out, &scenario, &comparisons)?;
    }
    out.flush()?;
    Ok(())
}
