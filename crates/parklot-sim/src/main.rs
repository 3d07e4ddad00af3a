//! Compare BFS, uniform-cost and A* nearest-spot searches on generated lots.
//!
//! Run: cargo run --bin parklot [CONFIG.json]
//!
//! Without a config file the five stock scenarios are used. Set
//! `PARKLOT_SEED` to replay a run and `RUST_LOG=debug` for search logs.

use std::io;

use parklot_sim::SimConfig;
use parklot_sim::config::SEED_ENV;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; the report goes to stdout.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let seed_env = std::env::var(SEED_ENV).ok();
    let config = config.with_seed_override(seed_env.as_deref())?;
    let seed = parklot_sim::resolve_seed(&config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    parklot_sim::run(&config, seed, &mut out)
}
