//! Plain-text console reports.

use std::io::{self, Write};

use parklot_core::Lot;
use parklot_search::SearchAlgorithm;

use crate::harness::Comparison;
use crate::scenario::Scenario;

const OCCUPIED: &str = "X ";
const FREE: &str = "O ";
const SEPARATOR: &str = "-------------------------------";

/// Render the lot one row per line (`X ` occupied, `O ` free), followed by
/// a blank line.
pub fn render_lot(lot: &Lot) -> String {
    let width = lot.width().max(1) as usize;
    let mut out = String::with_capacity(lot.len() * 2 + lot.height() as usize + 1);
    for row in lot.spots().collect::<Vec<_>>().chunks(width) {
        for s in row {
            out.push_str(if s.occupied { OCCUPIED } else { FREE });
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Write one algorithm's result block.
pub fn write_comparison(w: &mut impl Write, c: &Comparison) -> io::Result<()> {
    writeln!(w, "{}:", c.algorithm.name())?;
    match c.result.pos() {
        Some(p) => writeln!(w, "Found parking spot at {p}")?,
        None => writeln!(w, "No parking spot found")?,
    }
    writeln!(w, "Time taken: {:?} ms", c.elapsed_ms())?;
    writeln!(
        w,
        "Space Complexity (max nodes in memory): {}",
        c.result.peak_frontier
    )?;
    writeln!(
        w,
        "Accuracy: {}",
        if c.accurate { "Correct" } else { "Incorrect" }
    )?;
    writeln!(w, "Optimality (cost to parking spot): {}", c.result.cost)?;
    writeln!(w)
}

/// Write a full scenario report: header, lot, then every comparison.
pub fn write_scenario(
    w: &mut impl Write,
    scenario: &Scenario,
    comparisons: &[Comparison],
) -> io::Result<()> {
    let (width, height) = scenario.lot.dimensions();
    writeln!(w, "Scenario: {}", scenario.name)?;
    writeln!(w, "Parking Lot Size: {width}x{height}")?;
    writeln!(w, "Starting Position: {}", scenario.start)?;
    w.write_all(render_lot(&scenario.lot).as_bytes())?;
    for c in comparisons {
        write_comparison(w, c)?;
    }
    writeln!(w, "{SEPARATOR}")?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parklot_core::Point;
    use parklot_search::{Algorithm, SearchResult};
    use std::time::Duration;

    fn sample_lot() -> Lot {
        let mut lot = Lot::new(3, 2);
        lot.set_occupied(Point::new(0, 0), true).unwrap();
        lot.set_occupied(Point::new(2, 1), true).unwrap();
        lot
    }

    #[test]
    fn renders_rows() {
        assert_eq!(render_lot(&sample_lot()), "X O O \nO O X \n\n");
    }

    #[test]
    fn renders_empty_lot_as_blank_line() {
        assert_eq!(render_lot(&Lot::new(0, 0)), "\n");
    }

    #[test]
    fn scenario_report_layout() {
        let lot = sample_lot();
        let found = Comparison {
            algorithm: Algorithm::UniformCost,
            result: SearchResult::found(lot.cell_at(Point::new(1, 0)).unwrap(), 1, 2),
            elapsed: Duration::from_micros(1500),
            accurate: true,
        };
        let missing = Comparison {
            algorithm: Algorithm::Bfs,
            result: SearchResult::not_found(3),
            elapsed: Duration::ZERO,
            accurate: false,
        };
        let scenario = Scenario {
            name: "Sample".to_string(),
            lot,
            start: Point::ZERO,
        };

        let mut buf = Vec::new();
        write_scenario(&mut buf, &scenario, &[found, missing]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let expected = [
            "Scenario: Sample\n",
            "Parking Lot Size: 3x2\n",
            "Starting Position: (0, 0)\n",
            "X O O \n",
            "O O X \n",
            "\n",
            "UniformCostSearch:\n",
            "Found parking spot at (1, 0)\n",
            "Time taken: 1.5 ms\n",
            "Space Complexity (max nodes in memory): 2\n",
            "Accuracy: Correct\n",
            "Optimality (cost to parking spot): 1\n",
            "\n",
            "BFSSearch:\n",
            "No parking spot found\n",
            "Time taken: 0.0 ms\n",
            "Space Complexity (max nodes in memory): 3\n",
            "Accuracy: Incorrect\n",
            "Optimality (cost to parking spot): 0\n",
            "\n",
            "-------------------------------\n",
            "\n",
        ]
        .concat();
        assert_eq!(text, expected);
    }
}
