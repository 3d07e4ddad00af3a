//! Named scenarios: a lot plus a start position.

use parklot_core::{Lot, Point};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;
use crate::lotgen::{LotGen, Occupancy};

/// Description of a scenario, as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub start: Point,
    #[serde(default)]
    pub occupancy: Occupancy,
}

impl ScenarioSpec {
    pub fn new(name: impl Into<String>, width: i32, height: i32, occupancy: Occupancy) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            start: Point::ZERO,
            occupancy,
        }
    }

    /// Set the start position (builder).
    pub fn with_start(mut self, start: Point) -> Self {
        self.start = start;
        self
    }

    /// Generate the scenario's lot with `lotgen`.
    pub fn build<R: Rng>(&self, lotgen: &mut LotGen<R>) -> Result<Scenario, ScenarioError> {
        lotgen.reset(self.width, self.height);
        if !lotgen.lot.contains(self.start) {
            return Err(ScenarioError::StartOutOfBounds {
                start: self.start,
                width: self.width,
                height: self.height,
            });
        }
        let occupied = lotgen.apply(self.occupancy)?;
        log::debug!(
            "scenario \"{}\": {}x{} lot, {occupied} occupied, start {}",
            self.name,
            self.width,
            self.height,
            self.start
        );
        Ok(Scenario {
            name: self.name.clone(),
            lot: lotgen.take_lot(),
            start: self.start,
        })
    }
}

/// A generated scenario, ready to be searched.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub lot: Lot,
    pub start: Point,
}
