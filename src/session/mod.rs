// src/session/mod.rs

//! Interactive solve / pin / re-solve loop.
//!
//! The pure session state machine lives in [`core`] (with the per-event
//! logic in [`handlers`]); it consumes [`SessionEvent`]s and returns
//! [`SessionOutput`]s without doing any IO. The async shell in [`runtime`]
//! reads events from a channel and hands outputs to a [`ReportSink`].
//! [`command`] turns user input lines into events.

use crate::errors::Infeasible;
use crate::graph::ConstraintGraph;
use crate::model::ConstraintSet;
use crate::schedule::Schedule;

/// Events flowing into the session from the input reader or signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Solve the current sub-problem.
    Solve,
    /// Fix the start of `task` (original numbering) at the 24-hour `hour`.
    Pin { task: usize, hour: i64 },
    /// A line that could not be understood.
    Invalid { input: String, reason: String },
    /// Stop the session (user request, end of input, Ctrl-C).
    Quit,
}

/// Something the shell should show the user. Node indices inside are local
/// to the sub-problem; `frontier` maps them back to the original numbering.
#[derive(Debug, Clone)]
pub enum SessionOutput {
    Constraints {
        constraints: ConstraintSet,
        frontier: usize,
    },
    Graph {
        graph: ConstraintGraph,
        frontier: usize,
    },
    Solved {
        schedule: Schedule,
        frontier: usize,
    },
    Infeasible {
        infeasible: Infeasible,
        frontier: usize,
    },
    Pinned {
        task: usize,
        hour: i64,
    },
    Rejected(String),
    /// Ready for the next pin; tasks `first..=last` may be pinned.
    AwaitingPin {
        first: usize,
        last: usize,
    },
}

/// Result of handling a single [`SessionEvent`].
#[derive(Debug, Clone)]
pub struct SessionStep {
    pub outputs: Vec<SessionOutput>,
    /// Whether the outer loop should keep reading events.
    pub keep_running: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Stop after the first solve instead of waiting for pins (`--once`).
    pub exit_after_solve: bool,
    /// Emit the latest-time graph with every solve (`--show-graph`).
    pub show_graph: bool,
}

pub mod command;
pub mod core;
pub mod handlers;
pub mod runtime;
pub mod sink;

pub use command::{parse_command, spawn_line_reader};
pub use core::SessionCore;
pub use runtime::Session;
pub use sink::{ReportSink, StdoutSink, render_output};
