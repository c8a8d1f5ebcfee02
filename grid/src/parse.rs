//! Text maze format.
//!
//! ```text
//! #####B#
//! ##### #
//! ####  #
//! #### ##
//!      ##
//! A######
//! ```
//!
//! - `#` wall
//! - ` ` open cell
//! - `A` start (open)
//! - `B` goal (open)
//!
//! Lines split on `\n`; a trailing `\r` is dropped so CRLF input parses. A
//! single trailing newline at end of input does not create an empty row.

use crate::coord::Coordinate;
use crate::error::GridError;
use crate::grid::Grid;

const WALL: char = '#';
const OPEN: char = ' ';
const START: char = 'A';
const GOAL: char = 'B';

impl Grid {
    /// Parse the text maze format.
    ///
    /// # Errors
    ///
    /// - [`GridError::UnexpectedChar`] for anything other than `#`, space, `A`, `B`
    /// - [`GridError::MissingStart`] / [`GridError::MissingGoal`]
    /// - [`GridError::DuplicateStart`] / [`GridError::DuplicateGoal`]
    /// - any error from [`Grid::from_rows`] (empty, ragged)
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        let mut start: Option<Coordinate> = None;
        let mut goal: Option<Coordinate> = None;

        for (row, line) in text.lines().enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut flags = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let here = Coordinate::new(row, col);
                let blocked = match ch {
                    WALL => true,
                    OPEN => false,
                    START => {
                        if let Some(first) = start {
                            return Err(GridError::DuplicateStart {
                                first,
                                second: here,
                            });
                        }
                        start = Some(here);
                        false
                    }
                    GOAL => {
                        if let Some(first) = goal {
                            return Err(GridError::DuplicateGoal {
                                first,
                                second: here,
                            });
                        }
                        goal = Some(here);
                        false
                    }
                    other => {
                        return Err(GridError::UnexpectedChar {
                            row,
                            col,
                            ch: other,
                        })
                    }
                };
                flags.push(blocked);
            }
            rows.push(flags);
        }

        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let goal = goal.ok_or(GridError::MissingGoal)?;
        Self::from_rows(rows, start, goal)
    }
}
