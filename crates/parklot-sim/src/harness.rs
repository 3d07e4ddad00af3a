//! Runs several searches over the same lot and start, timing each.

use std::time::{Duration, Instant};

use parklot_core::{GridError, Lot, Point};
use parklot_search::{Algorithm, SearchAlgorithm, SearchResult};

use crate::scenario::Scenario;

/// One algorithm's outcome within a comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    /// Wall-clock time of the search call alone.
    pub elapsed: Duration,
    /// A spot was returned and it is free in the lot.
    pub accurate: bool,
}

impl Comparison {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

/// Run each of `algorithms` once on `lot` from `start`, in order.
pub fn compare(
    lot: &Lot,
    start: Point,
    algorithms: &[Algorithm],
) -> Result<Vec<Comparison>, GridError> {
    let mut rows = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        let t0 = Instant::now();
        let result = algorithm.find_spot(lot, start)?;
        let elapsed = t0.elapsed();

        let accurate = result
            .spot
            .is_some_and(|s| lot.is_occupied(s.pos) == Ok(false));
        if result.is_found() && !accurate {
            log::error!("{}: returned spot {:?} is not free", algorithm.name(), result.pos());
        }
        rows.push(Comparison {
            algorithm,
            result,
            elapsed,
            accurate,
        });
    }
    Ok(rows)
}

/// [`compare`] over a scenario's lot and start.
pub fn run_scenario(
    scenario: &Scenario,
    algorithms: &[Algorithm],
) -> Result<Vec<Comparison>, GridError> {
    log::info!("running scenario \"{}\"", scenario.name);
    compare(&scenario.lot, scenario.start, algorithms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn compares_every_algorithm_in_order() {
        let mut lot = Lot::new(2, 2);
        lot.set_occupied(Point::new(0, 0), true).unwrap();
        lot.set_occupied(Point::new(0, 1), true).unwrap();

        let rows = compare(&lot, Point::ZERO, &Algorithm::ALL).unwrap();
        let order: Vec<_> = rows.iter().map(|c| c.algorithm).collect();
        assert_eq!(order, Algorithm::ALL.to_vec());
        for c in &rows {
            assert!(c.accurate, "{}", c.algorithm);
            assert_eq!(c.result.pos(), Some(Point::new(1, 0)));
        }
        let costs: Vec<_> = rows.iter().map(|c| c.result.cost).collect();
        assert_eq!(costs, vec![1, 3, 1]);
    }

    #[test_log::test]
    fn not_found_is_reported_inaccurate() {
        let mut lot = Lot::new(1, 1);
        lot.fill(true);
        let rows = compare(&lot, Point::ZERO, &[Algorithm::Bfs]).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!rows[0].accurate);
        assert_eq!(rows[0].result, SearchResult::not_found(1));
    }

    #[test_log::test]
    fn bad_start_aborts_comparison() {
        let lot = Lot::new(2, 2);
        assert!(compare(&lot, Point::new(2, 2), &Algorithm::ALL).is_err());
    }

    #[test_log::test]
    fn runs_a_scenario() {
        let scenario = Scenario {
            name: "tiny".to_string(),
            lot: Lot::new(3, 3),
            start: Point::new(1, 1),
        };
        let rows = run_scenario(&scenario, &[Algorithm::UniformCost, Algorithm::AStar]).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|c| c.result.pos() == Some(Point::new(1, 1))));
        assert!(rows.iter().all(|c| c.elapsed_ms() >= 0.0));
    }
}
