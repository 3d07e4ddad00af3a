//! [`Algorithm`]: the three searches as one tagged value.

use std::fmt;
use std::str::FromStr;

use parklot_core::{GridError, Lot, Point};

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::result::SearchResult;
use crate::traits::SearchAlgorithm;
use crate::ucs::UniformCost;

/// One of the available search strategies.
///
/// Config names are `astar`, `bfs` and `ucs`; [`SearchAlgorithm::name`]
/// gives the report name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "ucs"))]
    UniformCost,
}

impl Algorithm {
    /// Every algorithm, in report order.
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::UniformCost];

    /// Short config name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Bfs => "bfs",
            Self::UniformCost => "ucs",
        }
    }
}

impl SearchAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::AStar => AStar.name(),
            Self::Bfs => Bfs.name(),
            Self::UniformCost => UniformCost.name(),
        }
    }

    fn find_spot(&self, lot: &Lot, start: Point) -> Result<SearchResult, GridError> {
        match self {
            Self::AStar => AStar.find_spot(lot, start),
            Self::Bfs => Bfs.find_spot(lot, start),
            Self::UniformCost => UniformCost.find_spot(lot, start),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when parsing an unrecognised algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm \"{}\" (expected astar, bfs or ucs)", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
