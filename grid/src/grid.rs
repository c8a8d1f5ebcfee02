//! `Grid`: a validated, read-only maze.
//!
//! # Invariants
//!
//! - The matrix is non-empty and rectangular (`height * width` cells).
//! - Every cell's stored coordinate matches its position.
//! - `start` and `goal` are in bounds and not blocked.
//!
//! All constructors go through [`Grid::from_rows`], so a `Grid` that exists
//! satisfies these. There are no mutating methods.

use std::fmt;

use crate::coord::Coordinate;
use crate::error::{Endpoint, GridError};

/// One cell of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coordinate: Coordinate,
    pub blocked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    /// Row-major, `height` rows of `width` cells.
    cells: Vec<Vec<Cell>>,
    start: Coordinate,
    goal: Coordinate,
}

impl Grid {
    /// Build a grid from a blocked-flag matrix.
    ///
    /// # Errors
    ///
    /// - [`GridError::Empty`] if no row has any cells
    /// - [`GridError::RaggedRow`] if any row is narrower than the widest one
    /// - [`GridError::OutOfBounds`] / [`GridError::Blocked`] for a bad start or goal
    pub fn from_rows(
        rows: Vec<Vec<bool>>,
        start: Coordinate,
        goal: Coordinate,
    ) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(height);
        for (row, flags) in rows.into_iter().enumerate() {
            if flags.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    actual: flags.len(),
                });
            }
            cells.push(
                flags
                    .into_iter()
                    .enumerate()
                    .map(|(col, blocked)| Cell {
                        coordinate: Coordinate::new(row, col),
                        blocked,
                    })
                    .collect(),
            );
        }

        let grid = Self {
            height,
            width,
            cells,
            start,
            goal,
        };
        grid.check_endpoint(Endpoint::Start, start)?;
        grid.check_endpoint(Endpoint::Goal, goal)?;
        Ok(grid)
    }

    fn check_endpoint(&self, what: Endpoint, coordinate: Coordinate) -> Result<(), GridError> {
        match self.cell(coordinate) {
            None => Err(GridError::OutOfBounds { what, coordinate }),
            Some(cell) if cell.blocked => Err(GridError::Blocked { what, coordinate }),
            Some(_) => Ok(()),
        }
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn start(&self) -> Coordinate {
        self.start
    }

    #[must_use]
    pub const fn goal(&self) -> Coordinate {
        self.goal
    }

    #[must_use]
    pub const fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height && coordinate.col < self.width
    }

    #[must_use]
    pub fn cell(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells
            .get(coordinate.row)
            .and_then(|row| row.get(coordinate.col))
    }

    /// Out-of-bounds coordinates count as blocked.
    #[must_use]
    pub fn is_blocked(&self, coordinate: Coordinate) -> bool {
        self.cell(coordinate).is_none_or(|cell| cell.blocked)
    }

    /// Rows of cells, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Number of traversable cells. Upper bound on any explored set.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.blocked)
            .count()
    }
}

/// Renders the text maze format accepted by [`Grid::parse`].
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = if cell.blocked {
                    '#'
                } else if cell.coordinate == self.start {
                    'A'
                } else if cell.coordinate == self.goal {
                    'B'
                } else {
                    ' '
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
