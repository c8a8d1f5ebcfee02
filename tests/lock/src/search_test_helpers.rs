//! Shared helpers for search lock tests.
//!
//! Reference answers here (flood fill, shortest distance) are computed
//! independently of the engine so tests compare against something other
//! than the code under test.

use std::collections::{BTreeSet, HashSet, VecDeque};

use mazewalk_grid::{Action, Coordinate, Grid};
use mazewalk_search::frontier::{EmptyFrontierError, Frontier, StateCounts};
use mazewalk_search::node::{SearchNode, Solution};
use rand::Rng;

/// Install a test-writer `tracing` subscriber once. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a fixture.
///
/// # Panics
///
/// Panics if the text is not a valid maze.
#[must_use]
pub fn grid(text: &str) -> Grid {
    Grid::parse(text).unwrap_or_else(|e| panic!("fixture does not parse: {e}"))
}

fn open_neighbors(grid: &Grid, at: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
    Action::ALL
        .into_iter()
        .filter_map(move |a| a.step(at))
        .filter(|&c| !grid.is_blocked(c))
}

/// All open cells connected to `from`, including `from`.
#[must_use]
pub fn reachable_from(grid: &Grid, from: Coordinate) -> BTreeSet<Coordinate> {
    let mut seen = BTreeSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some(at) = queue.pop_front() {
        for next in open_neighbors(grid, at) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Length of the shortest path from start to goal, if any.
#[must_use]
pub fn shortest_distance(grid: &Grid) -> Option<usize> {
    let mut dist = std::collections::HashMap::from([(grid.start(), 0usize)]);
    let mut queue = VecDeque::from([grid.start()]);
    while let Some(at) = queue.pop_front() {
        let d = dist[&at];
        if at == grid.goal() {
            return Some(d);
        }
        for next in open_neighbors(grid, at) {
            dist.entry(next).or_insert_with(|| {
                queue.push_back(next);
                d + 1
            });
        }
    }
    None
}

/// Assert that `solution` is a legal start-to-goal walk on `grid`.
///
/// - `actions` and `cells` have equal length
/// - applying `actions[i]` to the previous cell (start for `i == 0`) gives `cells[i]`
/// - every cell is open, and no cell repeats
/// - the walk ends on the goal (an empty walk means start == goal)
///
/// # Panics
///
/// Panics on the first violated condition.
pub fn assert_valid_solution(grid: &Grid, solution: &Solution) {
    assert_eq!(
        solution.actions.len(),
        solution.cells.len(),
        "actions and cells must pair up"
    );

    let mut at = grid.start();
    let mut seen = HashSet::from([at]);
    for (i, (&action, &cell)) in solution.actions.iter().zip(&solution.cells).enumerate() {
        assert_eq!(action.step(at), Some(cell), "step {i}: {action} from {at}");
        assert!(at.is_adjacent(cell), "step {i}: {at} -> {cell} not adjacent");
        assert!(!grid.is_blocked(cell), "step {i}: {cell} is blocked");
        assert!(seen.insert(cell), "step {i}: {cell} revisited");
        at = cell;
    }
    assert_eq!(at, grid.goal(), "walk must end on the goal");
}

/// A `height × width` grid with walls placed independently with
/// probability `wall_probability`, start at `(0, 0)` and goal at the
/// opposite corner (both forced open).
///
/// # Panics
///
/// Panics if either dimension is zero.
pub fn random_grid<R: Rng>(
    rng: &mut R,
    height: usize,
    width: usize,
    wall_probability: f64,
) -> Grid {
    let start = Coordinate::new(0, 0);
    let goal = Coordinate::new(height - 1, width - 1);
    let rows = (0..height)
        .map(|r| {
            (0..width)
                .map(|c| {
                    let here = Coordinate::new(r, c);
                    here != start && here != goal && rng.gen_bool(wall_probability)
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows, start, goal).expect("random grid is well formed")
}

/// First-in-first-out frontier. Lives here, not in the search crate, to
/// show that the traversal loop works with any [`Frontier`].
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<SearchNode>,
    states: StateCounts,
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: SearchNode) {
        self.states.increment(node.state);
        self.queue.push_back(node);
    }

    fn remove_next(&mut self) -> Result<SearchNode, EmptyFrontierError> {
        let node = self.queue.pop_front().ok_or(EmptyFrontierError)?;
        self.states.decrement(node.state);
        Ok(node)
    }

    fn contains_state(&self, state: Coordinate) -> bool {
        self.states.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Wraps a frontier and records every `add` that should have been
/// suppressed: a state already queued, or one that was removed earlier
/// (and so is in the explored set).
#[derive(Debug, Default)]
pub struct AuditedFrontier<F> {
    inner: F,
    removed: HashSet<Coordinate>,
    pub adds: usize,
    pub violations: Vec<String>,
}

impl<F: Frontier> AuditedFrontier<F> {
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            removed: HashSet::new(),
            adds: 0,
            violations: Vec::new(),
        }
    }
}

impl<F: Frontier> Frontier for AuditedFrontier<F> {
    fn add(&mut self, node: SearchNode) {
        self.adds += 1;
        if self.inner.contains_state(node.state) {
            self.violations
                .push(format!("{} added while already queued", node.state));
        }
        if self.removed.contains(&node.state) {
            self.violations
                .push(format!("{} added after it was explored", node.state));
        }
        self.inner.add(node);
    }

    fn remove_next(&mut self) -> Result<SearchNode, EmptyFrontierError> {
        let node = self.inner.remove_next()?;
        self.removed.insert(node.state);
        Ok(node)
    }

    fn contains_state(&self, state: Coordinate) -> bool {
        self.inner.contains_state(state)
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
