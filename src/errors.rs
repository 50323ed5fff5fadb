// src/errors.rs

//! Crate-wide error types and aliases.

use std::fmt;

use thiserror::Error;

use crate::model::{MAX_HOURS, NodeId};

/// Malformed constraint input, rejected before anything reaches the solver.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("invalid duration: {hours} (must be between 0 and {max} hours)", max = MAX_HOURS)]
    InvalidDuration { hours: i64 },

    #[error("invalid range: {lo}-{hi} (bounds must be between 0 and {max} hours and lo <= hi)", max = MAX_HOURS)]
    InvalidRange { lo: i64, hi: i64 },
}

/// Which of the two shortest-path runs found the negative cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvePass {
    /// Run on the reversed graph (earliest start offsets).
    Earliest,
    /// Run on the forward graph (latest start offsets).
    Latest,
}

impl fmt::Display for SolvePass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolvePass::Earliest => f.write_str("earliest start times"),
            SolvePass::Latest => f.write_str("latest start times"),
        }
    }
}

/// The constraint set admits no schedule: the derived graph has a negative
/// cycle reachable from the start-of-day anchor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("negative cycle detected for {pass} (total weight {weight}); no schedule exists")]
pub struct Infeasible {
    pub pass: SolvePass,
    /// Nodes of the cycle in edge order; the last node links back to the first.
    pub cycle: Vec<NodeId>,
    pub weight: i64,
}

#[derive(Error, Debug)]
pub enum DayplanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid day window: start {start} must be before end {end} (hours 0-23)")]
    InvalidWindow { start: i64, end: i64 },

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Infeasible(#[from] Infeasible),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, DayplanError>;
