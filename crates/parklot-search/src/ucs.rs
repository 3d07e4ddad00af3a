use parklot_core::{GridError, Lot, Point};

use crate::frontier::{Frontier, MinFrontier, PeakGauge, VisitedSet};
use crate::result::{SearchNode, SearchResult};
use crate::traits::SearchAlgorithm;

/// Uniform-cost search over unit-weight moves.
///
/// Spots are marked visited when expanded rather than when queued, so the
/// frontier may hold several entries for one spot; stale entries are skipped
/// as they are popped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniformCost;

impl SearchAlgorithm for UniformCost {
    fn name(&self) -> &'static str {
        "UniformCostSearch"
    }

    fn find_spot(&self, lot: &Lot, start: Point) -> Result<SearchResult, GridError> {
        let start_spot = lot.cell_at(start)?;

        let mut open = MinFrontier::new();
        let mut visited = VisitedSet::new(lot);
        let mut gauge = PeakGauge::default();

        open.push(SearchNode::uninformed(start_spot, 0));

        loop {
            gauge.record(open.len());
            let Some(current) = open.pop() else {
                break;
            };
            log::trace!("ucs: pop {} (g = {})", current.spot.pos, current.g);

            if current.spot.is_free() {
                log::debug!(
                    "ucs: found {} from {start}, cost {}, peak {}",
                    current.spot.pos,
                    current.g,
                    gauge.peak()
                );
                return Ok(SearchResult::found(current.spot, current.g, gauge.peak()));
            }

            // Stale duplicate of an already expanded spot.
            if !visited.insert(current.spot.pos) {
                continue;
            }

            for np in lot.neighbors(current.spot.pos) {
                if visited.contains(np) {
                    continue;
                }
                open.push(SearchNode::uninformed(lot.cell_at(np)?, current.g + 1));
            }
        }

        log::debug!("ucs: no free spot reachable from {start}, peak {}", gauge.peak());
        Ok(SearchResult::not_found(gauge.peak()))
    }
}
