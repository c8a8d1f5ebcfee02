//! Typed grid construction errors.
//!
//! These are the loading collaborator's rejections. Once a [`crate::Grid`]
//! exists its invariants hold, and the search engine does not re-check them.

use thiserror::Error;

use crate::coord::Coordinate;

/// Which designated cell a placement error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("maze has no cells")]
    Empty,

    #[error("row {row} has width {actual}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, col {col}")]
    UnexpectedChar { row: usize, col: usize, ch: char },

    #[error("maze has no start cell (A)")]
    MissingStart,

    #[error("maze has no goal cell (B)")]
    MissingGoal,

    #[error("maze has a second start at {second} (first at {first})")]
    DuplicateStart {
        first: Coordinate,
        second: Coordinate,
    },

    #[error("maze has a second goal at {second} (first at {first})")]
    DuplicateGoal {
        first: Coordinate,
        second: Coordinate,
    },

    #[error("{what} {coordinate} is outside the grid")]
    OutOfBounds {
        what: Endpoint,
        coordinate: Coordinate,
    },

    #[error("{what} {coordinate} is a wall")]
    Blocked {
        what: Endpoint,
        coordinate: Coordinate,
    },
}
