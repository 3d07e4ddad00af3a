use parklot_core::{GridError, Lot, Point};

use crate::frontier::{FifoFrontier, Frontier, PeakGauge, VisitedSet};
use crate::result::SearchResult;
use crate::traits::SearchAlgorithm;

/// Breadth-first search.
///
/// Spots are marked visited when enqueued, so each spot enters the queue at
/// most once. The reported cost is the number of dequeues performed up to
/// and including the accepting one, not the graph distance: a free start
/// spot costs 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bfs;

impl SearchAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "BFSSearch"
    }

    fn find_spot(&self, lot: &Lot, start: Point) -> Result<SearchResult, GridError> {
        let start_spot = lot.cell_at(start)?;

        let mut queue = FifoFrontier::new();
        let mut visited = VisitedSet::new(lot);
        let mut gauge = PeakGauge::default();
        let mut cost = 0u32;

        queue.push(start_spot);
        visited.insert(start);

        loop {
            gauge.record(queue.len());
            let Some(current) = queue.pop() else {
                break;
            };
            cost += 1;
            log::trace!("bfs: pop {} (dequeues: {cost})", current.pos);

            if current.is_free() {
                log::debug!(
                    "bfs: found {} from {start}, cost {cost}, peak {}",
                    current.pos,
                    gauge.peak()
                );
                return Ok(SearchResult::found(current, cost, gauge.peak()));
            }

            for np in lot.neighbors(current.pos) {
                if visited.insert(np) {
                    queue.push(lot.cell_at(np)?);
                }
            }
        }

        log::debug!("bfs: no free spot reachable from {start}, peak {}", gauge.peak());
        Ok(SearchResult::not_found(gauge.peak()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashSet, VecDeque};

    fn lot_with(width: i32, height: i32, occupied: &[(i32, i32)]) -> Lot {
        let mut lot = Lot::new(width, height);
        for &p in occupied {
            lot.set_occupied(p.into(), true).unwrap();
        }
        lot
    }

    /// Replays BFS over plain std collections and reports the largest queue
    /// length seen before any dequeue.
    fn traced_peak(lot: &Lot, start: Point) -> usize {
        let mut queue = VecDeque::from([start]);
        let mut seen = HashSet::from([start]);
        let mut peak = 0;
        while !queue.is_empty() {
            peak = peak.max(queue.len());
            let p = queue.pop_front().unwrap();
            if !lot.is_occupied(p).unwrap() {
                break;
            }
            for n in lot.neighbors(p) {
                if seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        peak
    }

    #[test]
    fn free_start_costs_one_dequeue() {
        let lot = Lot::new(3, 3);
        let r = Bfs.find_spot(&lot, Point::ZERO).unwrap();
        assert_eq!(r.pos(), Some(Point::ZERO));
        assert_eq!(r.cost, 1);
        assert_eq!(r.peak_frontier, 1);
    }

    #[test]
    fn cost_counts_dequeues_not_distance() {
        let lot = lot_with(2, 2, &[(0, 0), (0, 1)]);
        let r = Bfs.find_spot(&lot, Point::ZERO).unwrap();
        // (0,0), then (0,1), then (1,0): three dequeues for a spot one step away.
        assert_eq!(r.pos(), Some(Point::new(1, 0)));
        assert_eq!(r.cost, 3);
        assert_eq!(r.peak_frontier, 2);
    }

    #[test]
    fn enqueues_each_spot_once() {
        let lot = lot_with(2, 2, &[(0, 0), (0, 1), (1, 0)]);
        let r = Bfs.find_spot(&lot, Point::ZERO).unwrap();
        assert_eq!(r.pos(), Some(Point::new(1, 1)));
        assert_eq!(r.cost, 4);
        assert_eq!(r.peak_frontier, 2);
    }

    #[test]
    fn peak_matches_reference_trace() {
        let lot = lot_with(
            6,
            5,
            &[
                (0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (3, 1),
                (0, 2), (1, 2), (2, 2), (0, 3), (1, 3),
            ],
        );
        for start in [Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)] {
            let r = Bfs.find_spot(&lot, start).unwrap();
            assert_eq!(r.peak_frontier, traced_peak(&lot, start), "start {start}");
        }
    }

    #[test]
    fn exhausted_lot_reports_not_found() {
        let mut lot = Lot::new(3, 2);
        lot.fill(true);
        let r = Bfs.find_spot(&lot, Point::new(1, 1)).unwrap();
        assert!(!r.is_found());
        assert_eq!(r.cost, 0);
        assert_eq!(r.peak_frontier, traced_peak(&lot, Point::new(1, 1)));
    }
}
