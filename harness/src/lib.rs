//! Mazewalk Harness: run-level orchestration around the search engine.
//!
//! The harness picks an engine from a [`config::RunConfig`], runs it on a
//! [`mazewalk_grid::Grid`], and packages the run state as a
//! [`report::RunReport`] for whatever renders or stores it.
//!
//! The harness does NOT implement search logic. It delegates to
//! `mazewalk_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod fixtures;
pub mod report;
pub mod runner;
