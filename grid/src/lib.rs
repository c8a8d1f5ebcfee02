//! Mazewalk Grid: the immutable maze model consumed by the search engine.
//!
//! # API Surface
//!
//! - [`coord::Coordinate`] and [`coord::Action`] -- cell addressing and moves
//! - [`grid::Grid`] -- validated rectangular matrix of cells with start/goal
//! - [`grid::Grid::parse`] -- build a grid from the text maze format
//!
//! # Module Dependency Direction
//!
//! `coord` ← `grid` ← `parse`
//!
//! `error` is shared by all three. The grid is built once and never mutated.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coord;
pub mod error;
pub mod grid;
pub mod parse;

pub use coord::{Action, Coordinate};
pub use error::GridError;
pub use grid::{Cell, Grid};
