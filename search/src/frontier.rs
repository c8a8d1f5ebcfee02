//! Frontier contract and the last-in-first-out frontier used by depth-first
//! search.
//!
//! The traversal loop only talks to [`Frontier`]. Swapping the removal
//! policy (queue, cost heap, heuristic heap) is a matter of supplying a
//! different implementation; the loop does not change.

use std::collections::HashMap;

use mazewalk_grid::Coordinate;
use thiserror::Error;

use crate::node::SearchNode;

/// `remove_next` was called on an empty frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("frontier is empty")]
pub struct EmptyFrontierError;

/// Collection of discovered but not yet expanded nodes.
///
/// # Contract
///
/// - `add` never rejects; duplicate states may coexist.
/// - `remove_next` fails with [`EmptyFrontierError`] iff `is_empty()`;
///   otherwise it removes exactly one node chosen by the ordering policy.
/// - `contains_state(s)` is true iff at least one held node has state `s`.
/// - A frontier is scoped to one run. `traverse` refuses one that is not
///   empty, since held nodes point into another run's node arena.
pub trait Frontier {
    fn add(&mut self, node: SearchNode);

    /// Remove the next node according to this frontier's ordering policy.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyFrontierError`] if no nodes remain.
    fn remove_next(&mut self) -> Result<SearchNode, EmptyFrontierError>;

    fn contains_state(&self, state: Coordinate) -> bool;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Per-state multiplicity index shared by frontier implementations.
///
/// Keeps `contains_state` O(1) while allowing the same state to be held by
/// several nodes.
#[derive(Debug, Clone, Default)]
pub struct StateCounts {
    counts: HashMap<Coordinate, usize>,
}

impl StateCounts {
    pub fn increment(&mut self, state: Coordinate) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    pub fn decrement(&mut self, state: Coordinate) {
        if let Some(n) = self.counts.get_mut(&state) {
            *n -= 1;
            if *n == 0 {
                self.counts.remove(&state);
            }
        }
    }

    #[must_use]
    pub fn contains(&self, state: Coordinate) -> bool {
        self.counts.contains_key(&state)
    }
}

/// Stack-ordered frontier: the most recently added node is removed first.
#[derive(Debug, Clone, Default)]
pub struct StackFrontier {
    stack: Vec<SearchNode>,
    states: StateCounts,
}

impl StackFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: SearchNode) {
        self.states.increment(node.state);
        self.stack.push(node);
    }

    fn remove_next(&mut self) -> Result<SearchNode, EmptyFrontierError> {
        let node = self.stack.pop().ok_or(EmptyFrontierError)?;
        self.states.decrement(node.state);
        Ok(node)
    }

    fn contains_state(&self, state: Coordinate) -> bool {
        self.states.contains(state)
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
