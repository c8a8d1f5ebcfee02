//! Search policy types.

use crate::error::SearchError;

/// Per-run search configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// How expanded neighbors are ordered before they reach the frontier.
    pub neighbor_order: NeighborOrder,
    /// RNG seed for [`NeighborOrder::Shuffled`]. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Hard cap on frontier removals. `None` is unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// Fully reproducible policy: shuffled neighbors from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Validate before any search step runs.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero,
    /// which would stop the run before the start cell is examined.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            neighbor_order: NeighborOrder::Shuffled,
            seed: None,
            max_expansions: None,
        }
    }
}

/// Order in which the neighbors of one expansion are offered to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOrder {
    /// Uniform shuffle per expansion. Changes which path is found, never
    /// whether one is found.
    #[default]
    Shuffled,
    /// `Action::ALL` order, unshuffled.
    Fixed,
}
