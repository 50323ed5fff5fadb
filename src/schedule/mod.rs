// src/schedule/mod.rs

//! Solving a constraint set into a schedule, and shrinking it after a pin.
//!
//! One solve cycle builds the latest-time graph, runs shortest paths on its
//! reversed form (earliest offsets) and on the graph itself (latest
//! offsets), then extracts per-task windows. Nothing is kept between cycles.

pub mod extract;
pub mod reconstrain;

pub use extract::{Schedule, TaskWindow, extract};
pub use reconstrain::reconstrain;

use tracing::debug;

use crate::errors::{Infeasible, SolvePass};
use crate::graph::{ConstraintGraph, NegativeCycle, bellman_ford};
use crate::model::{ConstraintSet, NodeId};

/// Earliest and latest start offsets for every task, or the negative cycle
/// proving that none exist.
pub fn solve(
    constraints: &ConstraintSet,
    num_tasks: usize,
    start_hour: i64,
    end_hour: i64,
) -> Result<Schedule, Infeasible> {
    let latest_graph = ConstraintGraph::build(constraints, num_tasks, start_hour, end_hour);
    let earliest_graph = latest_graph.reversed();

    let earliest = bellman_ford(&earliest_graph, 0)
        .map_err(|cycle| infeasible(SolvePass::Earliest, cycle))?;
    let latest =
        bellman_ford(&latest_graph, 0).map_err(|cycle| infeasible(SolvePass::Latest, cycle))?;

    let schedule = extract(&earliest, &latest, start_hour, end_hour - start_hour);
    debug!(tasks = schedule.len(), start_hour, end_hour, "schedule solved");
    Ok(schedule)
}

fn infeasible(pass: SolvePass, cycle: NegativeCycle) -> Infeasible {
    Infeasible {
        pass,
        cycle: cycle.nodes.into_iter().map(NodeId::from_index).collect(),
        weight: cycle.weight,
    }
}
