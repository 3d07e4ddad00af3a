use parklot_core::{GridError, Lot, Point};

use crate::result::SearchResult;

/// A strategy for finding the nearest free spot from a start position.
pub trait SearchAlgorithm {
    /// Display name used in reports.
    fn name(&self) -> &'static str;

    /// Search `lot` outward from `start`.
    ///
    /// The lot is only read. Fails with [`GridError::OutOfBounds`] if `start`
    /// lies outside the lot; finding no free spot is an `Ok` result with
    /// `spot == None`.
    fn find_spot(&self, lot: &Lot, start: Point) -> Result<SearchResult, GridError>;
}
