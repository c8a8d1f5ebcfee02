//! `RunReport`: read-only snapshot of a finished run.
//!
//! This is what the visualization side consumes: explored cells in visit
//! order, the last current node, and the solution. The report never feeds
//! back into the engine.
//!
//! # Digest
//!
//! [`RunReport::digest`] hashes the canonical JSON of everything except
//! wall-clock time, so two runs with the same grid, config and seed produce
//! the same digest on any machine.

use std::time::Duration;

use mazewalk_grid::{Coordinate, Grid};
use mazewalk_search::node::Solution;
use mazewalk_search::search::SearchOutcome;
use mazewalk_search::state::RunState;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::config::Algorithm;
use crate::runner::RunError;

/// Domain prefix for run report digests.
pub const DOMAIN_RUN_REPORT: &[u8] = b"MAZEWALK::RUN_REPORT::V1\0";

/// Report schema identifier, embedded in the JSON.
pub const REPORT_SCHEMA_VERSION: &str = "run_report.v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub outcome: SearchOutcome,
    pub start: Coordinate,
    pub goal: Coordinate,
    /// Copied from `RunState::solution`.
    pub solution: Option<Solution>,
    /// Explored coordinates in visit order.
    pub explored: Vec<Coordinate>,
    /// State of the last node taken from the frontier.
    pub last_current: Option<Coordinate>,
    pub num_explored: u64,
    pub nodes_created: usize,
    pub duplicates_suppressed: u64,
    pub frontier_high_water: usize,
    /// Number of unblocked cells in the grid.
    pub open_cells: usize,
    pub elapsed: Duration,
}

impl RunReport {
    /// Snapshot `state` after a run on `grid`.
    #[must_use]
    pub fn from_run(
        algorithm: Algorithm,
        grid: &Grid,
        outcome: SearchOutcome,
        state: &RunState,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            outcome,
            start: grid.start(),
            goal: grid.goal(),
            solution: state.solution.clone(),
            explored: state.explored.as_slice().to_vec(),
            last_current: state.current.map(|node| node.state),
            num_explored: state.num_explored,
            nodes_created: state.nodes.len(),
            duplicates_suppressed: state.duplicates_suppressed,
            frontier_high_water: state.frontier_high_water,
            open_cells: grid.open_cell_count(),
            elapsed,
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    /// Steps from start to goal, if a solution was found.
    #[must_use]
    pub fn steps(&self) -> Option<usize> {
        self.solution.as_ref().map(Solution::len)
    }

    /// JSON view including wall-clock time.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut value = self.deterministic_json();
        if let Value::Object(map) = &mut value {
            let micros = u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX);
            map.insert("elapsed_us".into(), json!(micros));
        }
        value
    }

    /// Canonical JSON bytes: sorted keys, no whitespace, no wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::CanonFailed`] if serialization fails.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, RunError> {
        serde_json::to_vec(&self.deterministic_json()).map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })
    }

    /// `"sha256:<hex>"` over [`DOMAIN_RUN_REPORT`] followed by
    /// [`canonical_bytes`](Self::canonical_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`RunError::CanonFailed`] if serialization fails.
    pub fn digest(&self) -> Result<String, RunError> {
        let bytes = self.canonical_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_RUN_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    fn deterministic_json(&self) -> Value {
        let solution = self.solution.as_ref().map(|s| {
            json!({
                "actions": s.actions.iter().map(|a| a.label()).collect::<Vec<_>>(),
                "cells": s.cells.iter().copied().map(coordinate_json).collect::<Vec<_>>(),
                "steps": s.len(),
            })
        });

        json!({
            "algorithm": self.algorithm.name(),
            "counters": {
                "duplicates_suppressed": self.duplicates_suppressed,
                "frontier_high_water": self.frontier_high_water,
                "nodes_created": self.nodes_created,
                "num_explored": self.num_explored,
                "open_cells": self.open_cells,
            },
            "explored": self.explored.iter().copied().map(coordinate_json).collect::<Vec<_>>(),
            "goal": coordinate_json(self.goal),
            "last_current": self.last_current.map(coordinate_json),
            "outcome": outcome_name(self.outcome),
            "schema_version": REPORT_SCHEMA_VERSION,
            "solution": solution,
            "start": coordinate_json(self.start),
        })
    }
}

fn coordinate_json(c: Coordinate) -> Value {
    json!([c.row, c.col])
}

fn outcome_name(outcome: SearchOutcome) -> &'static str {
    match outcome {
        SearchOutcome::GoalReached { .. } => "goal_reached",
        SearchOutcome::FrontierExhausted => "frontier_exhausted",
        SearchOutcome::ExpansionBudgetExceeded => "expansion_budget_exceeded",
    }
}
