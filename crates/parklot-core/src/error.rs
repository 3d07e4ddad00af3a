use std::fmt;

use crate::geom::Point;

/// Error raised by bounds-checked [`Lot`](crate::Lot) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, width) × [0, height)`.
    OutOfBounds { pos: Point, width: i32, height: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "position {pos} is outside the {width}x{height} lot")
            }
        }
    }
}

impl std::error::Error for GridError {}
