//! Cell coordinates and the four axis-aligned moves between them.

use std::fmt;

/// A zero-indexed `(row, col)` cell address.
///
/// Equality is structural. Ordering is row-major, which keeps `BTreeSet`
/// iteration over coordinates stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True if `other` differs by exactly one row or one column.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

/// A single move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Base candidate order before any shuffling. Not a contract.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Upper-case label used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }

    /// Apply this move to `from`.
    ///
    /// Returns `None` when the move would leave the non-negative quadrant.
    /// The upper bounds are the grid's concern, not the action's.
    #[must_use]
    pub fn step(self, from: Coordinate) -> Option<Coordinate> {
        let Coordinate { row, col } = from;
        match self {
            Self::Up => row.checked_sub(1).map(|r| Coordinate::new(r, col)),
            Self::Down => row.checked_add(1).map(|r| Coordinate::new(r, col)),
            Self::Left => col.checked_sub(1).map(|c| Coordinate::new(row, c)),
            Self::Right => col.checked_add(1).map(|c| Coordinate::new(row, c)),
        }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
