use std::fmt;
use std::io;

use parklot_core::{GridError, Point};

/// Errors raised while building a scenario lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// More random occupied spots were requested than free spots exist.
    TooManyOccupied { requested: usize, available: usize },
    /// The scenario's start position lies outside its lot.
    StartOutOfBounds { start: Point, width: i32, height: i32 },
    /// A lot access failed.
    Grid(GridError),
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyOccupied {
                requested,
                available,
            } => write!(
                f,
                "cannot occupy {requested} spots: only {available} are free"
            ),
            Self::StartOutOfBounds {
                start,
                width,
                height,
            } => write!(f, "start {start} is outside the {width}x{height} lot"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ScenarioError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors raised while loading a [`SimConfig`](crate::SimConfig).
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    /// `PARKLOT_SEED` is set but is not an unsigned integer.
    InvalidSeed(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::InvalidSeed(s) => write!(f, "invalid seed \"{s}\": expected an unsigned integer"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::InvalidSeed(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
