//! Run configuration: which algorithm, and the knobs passed to its policy.
//!
//! Only depth-first search has an engine today. The other algorithms are
//! accepted by the parser so a caller can name them, and are rejected when a
//! policy is built for them.

use std::fmt;
use std::str::FromStr;

use mazewalk_search::policy::{NeighborOrder, SearchPolicy};

use crate::runner::RunError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    AStar,
    Dijkstra,
}

impl Algorithm {
    /// Short name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::GreedyBestFirst => "gbfs",
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
        }
    }

    /// Whether an engine exists for this algorithm.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::DepthFirst)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" => Ok(Self::DepthFirst),
            "bfs" => Ok(Self::BreadthFirst),
            "gbfs" => Ok(Self::GreedyBestFirst),
            "astar" => Ok(Self::AStar),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(RunError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// Configuration for one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub algorithm: Algorithm,
    /// Seed for neighbor shuffling. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Cap on frontier removals. `None` is unbounded.
    pub max_expansions: Option<u64>,
    /// `false` expands neighbors in the fixed base order.
    pub shuffle_neighbors: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::DepthFirst,
            seed: None,
            max_expansions: None,
            shuffle_neighbors: true,
        }
    }
}

/// Build the [`SearchPolicy`] for `config`.
///
/// # Errors
///
/// - [`RunError::UnsupportedAlgorithm`] if no engine exists for the algorithm
/// - [`RunError::Search`] if the resulting policy fails validation
pub fn build_search_policy(config: &RunConfig) -> Result<SearchPolicy, RunError> {
    if !config.algorithm.is_implemented() {
        return Err(RunError::UnsupportedAlgorithm {
            algorithm: config.algorithm,
        });
    }

    let policy = SearchPolicy {
        neighbor_order: if config.shuffle_neighbors {
            NeighborOrder::Shuffled
        } else {
            NeighborOrder::Fixed
        },
        seed: config.seed,
        max_expansions: config.max_expansions,
    };
    policy.validate()?;
    Ok(policy)
}
