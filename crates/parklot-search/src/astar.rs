use parklot_core::{GridError, Lot, Point};

use crate::frontier::{Frontier, MinFrontier, PeakGauge, VisitedSet};
use crate::result::{SearchNode, SearchResult};
use crate::traits::SearchAlgorithm;

/// A* search ordered by `f = g + h`.
///
/// There is no goal position to aim at, so `h` is the Manhattan distance
/// from a queued spot back to the *start*. This biases ties toward spots
/// near the start; it is not an admissible estimate toward the spot that is
/// eventually found.
///
/// A spot joins the closed set when it is expanded. Popped nodes are not
/// checked against the closed set themselves, so a spot queued twice before
/// its first expansion is expanded twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "AStarSearch"
    }

    fn find_spot(&self, lot: &Lot, start: Point) -> Result<SearchResult, GridError> {
        let start_spot = lot.cell_at(start)?;

        let mut open = MinFrontier::new();
        let mut closed = VisitedSet::new(lot);
        let mut gauge = PeakGauge::default();

        open.push(SearchNode::informed(start_spot, 0, 0));

        loop {
            gauge.record(open.len());
            let Some(current) = open.pop() else {
                break;
            };
            log::trace!(
                "astar: pop {} (g = {}, h = {})",
                current.spot.pos,
                current.g,
                current.h
            );

            if current.spot.is_free() {
                log::debug!(
                    "astar: found {} from {start}, cost {}, peak {}",
                    current.spot.pos,
                    current.g,
                    gauge.peak()
                );
                return Ok(SearchResult::found(current.spot, current.g, gauge.peak()));
            }

            closed.insert(current.spot.pos);

            for np in lot.neighbors(current.spot.pos) {
                if closed.contains(np) {
                    continue;
                }
                let h = np.manhattan(start);
                open.push(SearchNode::informed(lot.cell_at(np)?, current.g + 1, h));
            }
        }

        log::debug!("astar: no free spot reachable from {start}, peak {}", gauge.peak());
        Ok(SearchResult::not_found(gauge.peak()))
    }
}
