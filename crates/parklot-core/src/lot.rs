//! The [`Lot`] type: a fixed `width × height` grid of [`Spot`]s.
//!
//! Spots live in a flat, exclusively owned buffer indexed by
//! `y * width + x`. Cloning a `Lot` copies the buffer; two lots never share
//! spots.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::spot::Spot;

/// Axis-aligned neighbour offsets, in enumeration order: down, right, up,
/// left. Priority-ordered searches break ties by this order.
pub const NEIGHBOR_DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

/// A rectangular parking lot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    spots: Vec<Spot>,
    bounds: Range,
}

impl Lot {
    /// Create a lot of the given dimensions with every spot free.
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        let spots = bounds.iter().map(Spot::new).collect();
        Self { spots, bounds }
    }

    /// `(width, height)` of the lot.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.bounds.width(), self.bounds.height())
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The bounding range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Total number of spots.
    #[inline]
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat buffer index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
        } else {
            None
        }
    }

    fn checked_index(&self, p: Point) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            width: self.width(),
            height: self.height(),
        })
    }

    /// The spot at `p`.
    pub fn cell_at(&self, p: Point) -> Result<Spot, GridError> {
        let i = self.checked_index(p)?;
        Ok(self.spots[i])
    }

    pub fn is_occupied(&self, p: Point) -> Result<bool, GridError> {
        self.cell_at(p).map(|s| s.occupied)
    }

    /// Mark the spot at `p` occupied or free. Meant for lot construction;
    /// searches only ever borrow the lot immutably.
    pub fn set_occupied(&mut self, p: Point, occupied: bool) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.spots[i].occupied = occupied;
        Ok(())
    }

    /// In-bounds axis-aligned neighbours of `p`, in [`NEIGHBOR_DIRS`] order.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOR_DIRS
            .into_iter()
            .map(move |d| p + d)
            .filter(|&n| self.contains(n))
    }

    /// Iterate over all spots in row-major order.
    pub fn spots(&self) -> impl ExactSizeIterator<Item = &Spot> + '_ {
        self.spots.iter()
    }

    /// Number of occupied spots.
    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|s| s.occupied).count()
    }

    /// Number of free spots.
    pub fn free_count(&self) -> usize {
        self.len() - self.occupied_count()
    }

    /// Recompute every spot's occupancy from its position and current
    /// occupancy.
    pub fn map_spots(&mut self, mut f: impl FnMut(Point, bool) -> bool) {
        for s in self.spots.iter_mut() {
            s.occupied = f(s.pos, s.occupied);
        }
    }

    /// Set every spot to `occupied`.
    pub fn fill(&mut self, occupied: bool) {
        for s in self.spots.iter_mut() {
            s.occupied = occupied;
        }
    }
}
