//! Search entry point and expansion loop.
//!
//! [`traverse`] is the algorithm-independent skeleton: select, goal-check,
//! expand. The removal policy comes entirely from the [`Frontier`] it is
//! handed. [`DepthFirstSearch`] binds it to a [`StackFrontier`].

use mazewalk_grid::{Action, Coordinate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info, trace, warn};

use crate::contract::MazeView;
use crate::error::SearchError;
use crate::frontier::{Frontier, StackFrontier};
use crate::node::NodeId;
use crate::policy::{NeighborOrder, SearchPolicy};
use crate::state::RunState;

/// How a traversal stopped. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal node was removed from the frontier; `RunState::solution` is set.
    GoalReached { node: NodeId },
    /// The frontier emptied first. No path exists from start to goal.
    FrontierExhausted,
    /// `max_expansions` frontier removals happened without reaching the goal.
    ExpansionBudgetExceeded,
}

impl SearchOutcome {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self, Self::GoalReached { .. })
    }
}

/// Traversable neighbors of `state`: in bounds, not blocked.
///
/// Pure apart from drawing on `rng` when `order` is
/// [`NeighborOrder::Shuffled`].
pub fn neighbors<M, R>(
    maze: &M,
    state: Coordinate,
    order: NeighborOrder,
    rng: &mut R,
) -> Vec<(Action, Coordinate)>
where
    M: MazeView + ?Sized,
    R: Rng + ?Sized,
{
    let mut candidates: Vec<(Action, Coordinate)> = Action::ALL
        .iter()
        .filter_map(|&action| action.step(state).map(|next| (action, next)))
        .filter(|&(_, next)| maze.in_bounds(next) && !maze.is_blocked(next))
        .collect();

    if order == NeighborOrder::Shuffled {
        candidates.shuffle(rng);
    }
    candidates
}

/// Run graph search over `maze` using `frontier`'s removal order.
///
/// `run` is reset first. On return it holds the explored set, node arena,
/// last current node and, if the goal was reached, the solution.
///
/// A neighbor is dropped when its state is already in the frontier or
/// already explored, so every coordinate is explored at most once and the
/// loop terminates on any finite maze.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] if `policy` fails validation (nothing
///   is run and `run` is left untouched)
/// - [`SearchError::FrontierNotEmpty`] if `frontier` already holds nodes
///   (nothing is run; `run` and `frontier` are left untouched)
/// - [`SearchError::EmptyFrontier`] if `frontier` reports non-empty but
///   fails to yield a node
pub fn traverse<M, F, R>(
    maze: &M,
    frontier: &mut F,
    policy: &SearchPolicy,
    rng: &mut R,
    run: &mut RunState,
) -> Result<SearchOutcome, SearchError>
where
    M: MazeView + ?Sized,
    F: Frontier + ?Sized,
    R: Rng + ?Sized,
{
    policy.validate()?;
    if !frontier.is_empty() {
        return Err(SearchError::FrontierNotEmpty {
            len: frontier.len(),
        });
    }
    run.reset();

    let goal = maze.goal();
    let root = run.nodes.push_root(maze.start());
    frontier.add(root);
    run.current = Some(root);
    run.frontier_high_water = frontier.len();

    info!(start = %root.state, %goal, "starting search");

    loop {
        if frontier.is_empty() {
            info!(explored = run.num_explored, "frontier exhausted, no path to goal");
            return Ok(SearchOutcome::FrontierExhausted);
        }

        if let Some(max) = policy.max_expansions {
            if run.num_explored >= max {
                warn!(max_expansions = max, "expansion budget exceeded");
                return Ok(SearchOutcome::ExpansionBudgetExceeded);
            }
        }

        let current = frontier.remove_next().inspect_err(|e| {
            error!(frontier_len = frontier.len(), "{e} after non-empty check");
        })?;
        run.num_explored += 1;
        run.current = Some(current);

        debug!(
            state = %current.state,
            depth = current.depth,
            frontier = frontier.len(),
            "exploring node"
        );

        if current.state == goal {
            let solution = run.nodes.path_to(current.id);
            run.explored.insert(current.state);
            info!(
                steps = solution.len(),
                explored = run.num_explored,
                "goal reached"
            );
            run.solution = Some(solution);
            return Ok(SearchOutcome::GoalReached { node: current.id });
        }

        let fresh = run.explored.insert(current.state);
        debug_assert!(fresh, "{} explored twice", current.state);

        for (action, next) in neighbors(maze, current.state, policy.neighbor_order, rng) {
            if frontier.contains_state(next) || run.explored.contains(next) {
                run.duplicates_suppressed += 1;
                trace!(from = %current.state, %action, state = %next, "neighbor suppressed");
                continue;
            }
            let child = run.nodes.push_child(&current, next, action);
            frontier.add(child);
        }
        run.frontier_high_water = run.frontier_high_water.max(frontier.len());
    }
}

/// Depth-first search over a borrowed maze.
///
/// The engine holds only the maze and policy. Each [`solve`](Self::solve)
/// call builds its own frontier and RNG and writes into the caller's
/// [`RunState`], so one engine can serve any number of independent runs.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch<'m, M: ?Sized> {
    maze: &'m M,
    policy: SearchPolicy,
}

impl<'m, M: MazeView + ?Sized> DepthFirstSearch<'m, M> {
    #[must_use]
    pub fn new(maze: &'m M, policy: SearchPolicy) -> Self {
        Self { maze, policy }
    }

    /// Solve with an RNG seeded from `policy.seed`, or from entropy if unset.
    ///
    /// # Errors
    ///
    /// See [`traverse`].
    pub fn solve(&self, run: &mut RunState) -> Result<SearchOutcome, SearchError> {
        let mut rng = match self.policy.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.solve_with_rng(run, &mut rng)
    }

    /// Solve with a caller-supplied randomness source.
    ///
    /// # Errors
    ///
    /// See [`traverse`].
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        run: &mut RunState,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError> {
        let mut frontier = StackFrontier::new();
        traverse(self.maze, &mut frontier, &self.policy, rng, run)
    }
}
