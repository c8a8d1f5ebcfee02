//! Harness runner: configure, solve, report.
//!
//! # Pipeline
//!
//! ```text
//! build_search_policy() → engine.solve(&mut RunState) → RunReport::from_run()
//! ```
//!
//! Each run owns its `RunState`. [`run_seeds`] fans independent runs out
//! over scoped threads sharing only the read-only grid, at most
//! [`thread::available_parallelism`] at a time.

use std::num::NonZeroUsize;
use std::thread;
use std::time::Instant;

use mazewalk_grid::Grid;
use mazewalk_search::search::{DepthFirstSearch, SearchOutcome};
use mazewalk_search::state::RunState;
use mazewalk_search::{SearchError, SearchPolicy};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::{build_search_policy, Algorithm, RunConfig};
use crate::report::RunReport;

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    /// Algorithm name not recognised.
    #[error("unknown search algorithm {name:?}")]
    UnknownAlgorithm { name: String },
    /// Algorithm recognised but has no engine.
    #[error("search algorithm {algorithm} is not implemented")]
    UnsupportedAlgorithm { algorithm: Algorithm },
    /// Pre-flight or invariant failure from the search engine.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// Canonical JSON serialization of a report failed.
    #[error("canonical JSON serialization failed: {detail}")]
    CanonFailed { detail: String },
    /// A worker thread in [`run_seeds`] panicked.
    #[error("run for seed {seed} panicked")]
    WorkerPanicked { seed: u64 },
}

/// Run the configured algorithm on `grid`.
///
/// A maze without a path is not an error: the report's outcome is
/// `FrontierExhausted` and it carries no solution.
///
/// # Errors
///
/// Returns [`RunError`] if the config is rejected or the engine hits an
/// internal invariant breach.
pub fn run(grid: &Grid, config: &RunConfig) -> Result<RunReport, RunError> {
    let policy = build_search_policy(config)?;
    let mut state = RunState::new();

    let started = Instant::now();
    let outcome = solve(grid, config.algorithm, &policy, &mut state)?;
    let elapsed = started.elapsed();

    let report = RunReport::from_run(config.algorithm, grid, outcome, &state, elapsed);
    match report.steps() {
        Some(steps) => info!(
            algorithm = %config.algorithm,
            steps,
            explored = report.num_explored,
            elapsed_us = elapsed.as_micros(),
            "solution found"
        ),
        None => info!(
            algorithm = %config.algorithm,
            explored = report.num_explored,
            elapsed_us = elapsed.as_micros(),
            "no solution found"
        ),
    }
    Ok(report)
}

fn solve(
    grid: &Grid,
    algorithm: Algorithm,
    policy: &SearchPolicy,
    state: &mut RunState,
) -> Result<SearchOutcome, RunError> {
    match algorithm {
        Algorithm::DepthFirst => Ok(DepthFirstSearch::new(grid, policy.clone()).solve(state)?),
        other => Err(RunError::UnsupportedAlgorithm { algorithm: other }),
    }
}

/// Run `config` once per seed, concurrently.
///
/// Seeds are processed in batches of [`thread::available_parallelism`]
/// (1 if unknown), one scoped thread per seed in a batch. `config.seed` is
/// overridden by each entry of `seeds`. Reports come back in `seeds` order.
///
/// # Errors
///
/// Returns the first [`RunError`] in `seeds` order, or
/// [`RunError::WorkerPanicked`] if a worker thread panicked. Batches after
/// the failing one are not started.
pub fn run_seeds(
    grid: &Grid,
    config: &RunConfig,
    seeds: &[u64],
) -> Result<Vec<RunReport>, RunError> {
    let workers = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    debug!(seeds = seeds.len(), workers, "running seeds");

    let mut reports = Vec::with_capacity(seeds.len());
    for batch in seeds.chunks(workers) {
        reports.extend(run_batch(grid, config, batch)?);
    }
    Ok(reports)
}

fn run_batch(
    grid: &Grid,
    config: &RunConfig,
    seeds: &[u64],
) -> Result<Vec<RunReport>, RunError> {
    thread::scope(|scope| {
        let handles: Vec<_> = seeds
            .iter()
            .map(|&seed| {
                let config = RunConfig {
                    seed: Some(seed),
                    ..config.clone()
                };
                (seed, scope.spawn(move || run(grid, &config)))
            })
            .collect();

        handles
            .into_iter()
            .map(|(seed, handle)| {
                handle
                    .join()
                    .map_err(|_| RunError::WorkerPanicked { seed })?
            })
            .collect()
    })
}
