//! The [`Spot`] type: one parking space of a lot.

use std::hash::{Hash, Hasher};

use crate::geom::Point;

/// A single parking space.
///
/// Identity is positional: two spots compare equal (and hash equally) iff
/// their positions match, whatever their occupancy.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spot {
    pub pos: Point,
    pub occupied: bool,
}

impl Spot {
    /// A free spot at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            occupied: false,
        }
    }

    /// Set the occupancy (builder).
    #[inline]
    pub const fn with_occupied(mut self, occupied: bool) -> Self {
        self.occupied = occupied;
        self
    }

    #[inline]
    pub const fn is_free(self) -> bool {
        !self.occupied
    }
}

impl PartialEq for Spot {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Spot {}

impl Hash for Spot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}
