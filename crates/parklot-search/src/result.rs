use parklot_core::{Point, Spot};

use crate::frontier::Prioritized;

/// Outcome of one search invocation.
///
/// `spot == None` means every reachable spot was occupied; this is a normal
/// result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The free spot found, if any.
    pub spot: Option<Spot>,
    /// Path cost to `spot`; 0 when nothing was found.
    pub cost: u32,
    /// Largest number of pending entries the frontier held at once.
    pub peak_frontier: usize,
}

impl SearchResult {
    pub fn found(spot: Spot, cost: u32, peak_frontier: usize) -> Self {
        Self {
            spot: Some(spot),
            cost,
            peak_frontier,
        }
    }

    pub fn not_found(peak_frontier: usize) -> Self {
        Self {
            spot: None,
            cost: 0,
            peak_frontier,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.spot.is_some()
    }

    /// Position of the spot found, if any.
    #[inline]
    pub fn pos(&self) -> Option<Point> {
        self.spot.map(|s| s.pos)
    }
}

// ---------------------------------------------------------------------------
// Internal search node for the priority-ordered searches
// ---------------------------------------------------------------------------

/// A frontier entry: a spot plus its cost bookkeeping.
///
/// `g` is the path cost so far and `h` the heuristic estimate; uniform-cost
/// nodes carry `h == 0`, so their priority `f` reduces to `g`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) spot: Spot,
    pub(crate) g: u32,
    pub(crate) h: u32,
}

impl SearchNode {
    pub(crate) fn uninformed(spot: Spot, g: u32) -> Self {
        Self { spot, g, h: 0 }
    }

    pub(crate) fn informed(spot: Spot, g: u32, h: u32) -> Self {
        Self { spot, g, h }
    }

    #[inline]
    pub(crate) fn f(&self) -> u32 {
        self.g + self.h
    }
}

impl Prioritized for SearchNode {
    #[inline]
    fn priority(&self) -> u32 {
        self.f()
    }
}
