//! Maze contract trait.

use mazewalk_grid::{Coordinate, Grid};

/// Read-only view of a maze, as the traversal engine sees it.
///
/// # Contract
///
/// - `start()` and `goal()` are in bounds and not blocked. The engine does
///   not re-validate this; it is the loader's job.
/// - `is_blocked` must return `true` for any coordinate outside
///   `height() x width()`.
/// - Answers must not change for the duration of a run.
pub trait MazeView {
    fn height(&self) -> usize;

    fn width(&self) -> usize;

    /// True if `coordinate` lies inside `height() x width()`.
    fn in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.height() && coordinate.col < self.width()
    }

    fn is_blocked(&self, coordinate: Coordinate) -> bool;

    fn start(&self) -> Coordinate;

    fn goal(&self) -> Coordinate;
}

impl MazeView for Grid {
    fn height(&self) -> usize {
        Grid::height(self)
    }

    fn width(&self) -> usize {
        Grid::width(self)
    }

    fn in_bounds(&self, coordinate: Coordinate) -> bool {
        Grid::in_bounds(self, coordinate)
    }

    fn is_blocked(&self, coordinate: Coordinate) -> bool {
        Grid::is_blocked(self, coordinate)
    }

    fn start(&self) -> Coordinate {
        Grid::start(self)
    }

    fn goal(&self) -> Coordinate {
        Grid::goal(self)
    }
}
