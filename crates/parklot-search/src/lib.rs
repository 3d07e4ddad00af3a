//! Nearest-free-spot search over parking lots.
//!
//! Three interchangeable strategies search a [`Lot`](parklot_core::Lot)
//! outward from a start position and stop at the first free spot they pop:
//!
//! - **Breadth-first** ([`Bfs`]): FIFO frontier, cost counts dequeues.
//! - **Uniform cost** ([`UniformCost`]): min-frontier on path cost.
//! - **A\*** ([`AStar`]): min-frontier on path cost plus Manhattan distance
//!   back to the start.
//!
//! Each call returns a [`SearchResult`] with the spot found (if any), its
//! cost and the peak frontier size. [`Algorithm`] wraps all three as one
//! value for harnesses that compare them.

mod algorithm;
mod astar;
mod bfs;
pub mod frontier;
mod result;
mod traits;
mod ucs;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::AStar;
pub use bfs::Bfs;
pub use result::SearchResult;
pub use traits::SearchAlgorithm;
pub use ucs::UniformCost;
