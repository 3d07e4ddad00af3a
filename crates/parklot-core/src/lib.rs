//! **parklot-core** — the parking lot model.
//!
//! This crate provides the types shared across the *parklot* workspace:
//! geometry primitives, the [`Spot`] cell, the [`Lot`] grid and the
//! [`GridError`] raised by its bounds-checked accessors.

pub mod error;
pub mod geom;
pub mod lot;
pub mod spot;

pub use error::GridError;
pub use geom::{Point, Range};
pub use lot::{Lot, NEIGHBOR_DIRS};
pub use spot::Spot;
