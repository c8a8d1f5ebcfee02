//! Shared helpers for mazewalk benchmark suites.

use mazewalk_grid::Grid;
use mazewalk_harness::fixtures;
use mazewalk_search::{DepthFirstSearch, RunState, SearchOutcome, SearchPolicy};

/// A named maze shape benchmarked at one size.
pub struct Regime {
    pub name: &'static str,
    pub grid: Grid,
}

/// Open fields: wide frontier, many suppressed duplicates.
///
/// # Panics
///
/// Panics if a generator rejects its dimensions. Benchmark setup failures are fatal.
#[must_use]
pub fn open_field_regimes() -> Vec<Regime> {
    [16, 64, 256]
        .into_iter()
        .map(|side| Regime {
            name: "open_field",
            grid: fixtures::open_field(side, side).expect("open_field"),
        })
        .collect()
}

/// Serpentines: one long path, the frontier never holds more than a few nodes.
///
/// # Panics
///
/// Panics if a generator rejects its dimensions.
#[must_use]
pub fn serpentine_regimes() -> Vec<Regime> {
    [17, 65, 257]
        .into_iter()
        .map(|side| Regime {
            name: "serpentine",
            grid: fixtures::serpentine(side, side).expect("serpentine"),
        })
        .collect()
}

/// Hand-drawn fixtures.
///
/// # Panics
///
/// Panics if a fixture fails to parse.
#[must_use]
pub fn fixture_regimes() -> Vec<Regime> {
    fixtures::ALL
        .iter()
        .map(|&(name, text)| Regime {
            name,
            grid: Grid::parse(text).expect("fixture parses"),
        })
        .collect()
}

/// Solve `grid` once with a fixed seed into `run`.
///
/// # Panics
///
/// Panics if the engine returns an error. Benchmark runs are expected to succeed.
pub fn solve_seeded(grid: &Grid, seed: u64, run: &mut RunState) -> SearchOutcome {
    DepthFirstSearch::new(grid, SearchPolicy::seeded(seed))
        .solve(run)
        .expect("search should succeed in benchmarks")
}
