//! Mazewalk Search: frontier-driven graph search over a grid maze.
//!
//! This crate depends only on `mazewalk_grid`. It does NOT depend on
//! `mazewalk_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! mazewalk_grid  ←  mazewalk_search  ←  mazewalk_harness
//! (grid model)      (frontier, nodes)    (config, runner, report)
//! ```
//!
//! # Key types
//!
//! - [`MazeView`] -- what the engine needs from a maze
//! - [`SearchNode`] / [`NodeArena`] -- immutable nodes with index parent links
//! - [`Frontier`] -- add / remove-next / contains-state / is-empty contract
//! - [`StackFrontier`] -- last-in-first-out frontier for depth-first search
//! - [`traverse`] -- the select / goal-check / expand loop over any frontier
//! - [`DepthFirstSearch`] -- [`traverse`] bound to a [`StackFrontier`]
//! - [`RunState`] -- explored set, current node, and solution of one run

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
pub mod state;

pub use contract::MazeView;
pub use error::SearchError;
pub use frontier::{EmptyFrontierError, Frontier, StackFrontier};
pub use node::{NodeArena, NodeId, SearchNode, Solution};
pub use policy::{NeighborOrder, SearchPolicy};
pub use search::{neighbors, traverse, DepthFirstSearch, SearchOutcome};
pub use state::{ExploredSet, RunState};
