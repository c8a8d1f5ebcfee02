//! Run-scoped search state.
//!
//! One [`RunState`] belongs to one traversal. It is reset when a traversal
//! starts, mutated only by the engine while it runs, and read by callers
//! (reports, renderers) during or after the run. Concurrent searches each
//! need their own.

use std::collections::HashSet;

use mazewalk_grid::Coordinate;

use crate::node::{NodeArena, SearchNode, Solution};

/// Insertion-ordered set of fully expanded coordinates.
#[derive(Debug, Clone, Default)]
pub struct ExploredSet {
    order: Vec<Coordinate>,
    members: HashSet<Coordinate>,
}

impl ExploredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` (and changes nothing) if `state` was already present.
    pub fn insert(&mut self, state: Coordinate) -> bool {
        if !self.members.insert(state) {
            return false;
        }
        self.order.push(state);
        true
    }

    #[must_use]
    pub fn contains(&self, state: Coordinate) -> bool {
        self.members.contains(&state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Coordinates in the order they were explored.
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

/// Everything one search invocation produces.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    /// Node most recently taken from the frontier.
    pub current: Option<SearchNode>,
    /// Number of frontier removals, including the goal removal.
    pub num_explored: u64,
    pub explored: ExploredSet,
    /// `Some` only once the goal has been removed from the frontier.
    pub solution: Option<Solution>,
    /// Every node created during the run, indexed by `NodeId`.
    pub nodes: NodeArena,
    /// Neighbors dropped because their state was already queued or explored.
    pub duplicates_suppressed: u64,
    pub frontier_high_water: usize,
}

impl RunState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return to the zero/absent state. Called at the start of every run.
    pub fn reset(&mut self) {
        self.current = None;
        self.num_explored = 0;
        self.explored.clear();
        self.solution = None;
        self.nodes.clear();
        self.duplicates_suppressed = 0;
        self.frontier_high_water = 0;
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}
