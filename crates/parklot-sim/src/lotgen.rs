//! Occupancy generation for scenario lots.
//!
//! [`LotGen`] owns an explicitly passed random generator, so a seeded
//! generator reproduces the same lots run after run.

use parklot_core::{Lot, Point};
use rand::{Rng, RngExt};
use serde::{Deserialize, Serialize};

use crate::error::ScenarioError;

/// How a scenario lot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Occupancy {
    /// Every spot free.
    #[default]
    Empty,
    /// `count` distinct spots chosen uniformly at random.
    Random { count: usize },
    /// Every spot with `x < width / 2`.
    LeftHalf,
    /// Every spot occupied.
    Full,
}

/// Lot generator.
pub struct LotGen<R: Rng> {
    pub rng: R,
    pub lot: Lot,
}

impl<R: Rng> LotGen<R> {
    /// Create a generator with an empty (0x0) lot.
    pub fn new(rng: R) -> Self {
        Self::with_lot(Lot::new(0, 0), rng)
    }

    pub fn with_lot(lot: Lot, rng: R) -> Self {
        Self { rng, lot }
    }

    /// Replace the current lot with a free `width × height` one.
    pub fn reset(&mut self, width: i32, height: i32) {
        self.lot = Lot::new(width, height);
    }

    /// Hand the current lot out, leaving an empty one behind.
    pub fn take_lot(&mut self) -> Lot {
        std::mem::replace(&mut self.lot, Lot::new(0, 0))
    }

    /// Occupy `count` currently free spots chosen at random, retrying on
    /// spots that are already taken.
    ///
    /// Fails without touching the lot if fewer than `count` spots are free.
    pub fn occupy_random(&mut self, count: usize) -> Result<usize, ScenarioError> {
        let available = self.lot.free_count();
        if count > available {
            log::warn!("refusing to occupy {count} spots, only {available} free");
            return Err(ScenarioError::TooManyOccupied {
                requested: count,
                available,
            });
        }

        let (w, h) = self.lot.dimensions();
        for _ in 0..count {
            let p = loop {
                let p = Point::new(self.rng.random_range(0..w), self.rng.random_range(0..h));
                if !self.lot.is_occupied(p)? {
                    break p;
                }
            };
            self.lot.set_occupied(p, true)?;
        }
        Ok(count)
    }

    /// Occupy the left half of the lot (`x < width / 2`). Returns how many
    /// spots changed from free to occupied.
    pub fn occupy_left_half(&mut self) -> usize {
        let half = self.lot.width() / 2;
        let before = self.lot.occupied_count();
        self.lot.map_spots(|p, occupied| occupied || p.x < half);
        self.lot.occupied_count() - before
    }

    /// Apply an [`Occupancy`] pattern to the current lot. Returns how many
    /// spots became occupied.
    pub fn apply(&mut self, occupancy: Occupancy) -> Result<usize, ScenarioError> {
        match occupancy {
            Occupancy::Empty => Ok(0),
            Occupancy::Random { count } => self.occupy_random(count),
            Occupancy::LeftHalf => Ok(self.occupy_left_half()),
            Occupancy::Full => {
                let free = self.lot.free_count();
                self.lot.fill(true);
                Ok(free)
            }
        }
    }
}
