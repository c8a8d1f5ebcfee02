//! Typed search errors.
//!
//! `SearchError` covers pre-flight failures and invariant breaches only.
//! Running out of frontier before reaching the goal is a normal outcome and
//! is reported as [`crate::search::SearchOutcome::FrontierExhausted`].

use thiserror::Error;

use crate::frontier::EmptyFrontierError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy was rejected before any search step ran.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// The frontier handed to a traversal still held nodes. Their ids
    /// belong to another run's arena, so the run is refused before it starts.
    #[error("frontier must be empty at search start, holds {len} node(s)")]
    FrontierNotEmpty { len: usize },

    /// `remove_next` failed on a frontier that reported itself non-empty.
    /// Indicates a broken `Frontier` implementation; the run is aborted.
    #[error(transparent)]
    EmptyFrontier(#[from] EmptyFrontierError),
}
