//! Simulation configuration.
//!
//! A config is a JSON document; every field is optional:
//!
//! ```json
//! {
//!   "seed": 7,
//!   "algorithms": ["astar", "bfs", "ucs"],
//!   "scenarios": [
//!     { "name": "Corner", "width": 8, "height": 8,
//!       "start": { "x": 0, "y": 0 },
//!       "occupancy": { "kind": "random", "count": 40 } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use parklot_core::Point;
use parklot_search::Algorithm;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lotgen::Occupancy;
use crate::scenario::ScenarioSpec;

/// Environment variable overriding [`SimConfig::seed`].
pub const SEED_ENV: &str = "PARKLOT_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for lot generation; drawn at random when absent.
    pub seed: Option<u64>,
    /// Algorithms to compare, in report order.
    pub algorithms: Vec<Algorithm>,
    pub scenarios: Vec<ScenarioSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            algorithms: Algorithm::ALL.to_vec(),
            scenarios: default_scenarios(),
        }
    }
}

impl SimConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Apply an override seed taken from `value` (the contents of
    /// [`SEED_ENV`]). `None` leaves the config unchanged.
    pub fn with_seed_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(v) = value {
            let seed = v
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(v.to_string()))?;
            self.seed = Some(seed);
        }
        Ok(self)
    }
}

/// The five stock scenarios: sparse, dense, patterned, large and small lots,
/// all searched from the top-left corner.
pub fn default_scenarios() -> Vec<ScenarioSpec> {
    vec![
        ScenarioSpec::new("Almost Empty Parking Lot", 10, 10, Occupancy::Random { count: 10 }),
        ScenarioSpec::new("Almost Full Parking Lot", 10, 10, Occupancy::Random { count: 90 }),
        ScenarioSpec::new("Patterned Parking Lot (Half Full)", 10, 10, Occupancy::LeftHalf),
        ScenarioSpec::new("Large Parking Lot", 20, 20, Occupancy::Random { count: 300 }),
        ScenarioSpec::new("Small Parking Lot", 5, 5, Occupancy::Random { count: 20 }),
    ]
    .into_iter()
    .map(|s| s.with_start(Point::ZERO))
    .collect()
}
