// src/report.rs

//! Plain-text rendering of constraints, graphs, schedules and negative
//! cycles. The solver core never formats strings; everything printed goes
//! through here.

use std::fmt::Write as _;

use crate::errors::Infeasible;
use crate::graph::ConstraintGraph;
use crate::model::{ConstraintSet, DifferenceConstraint, NodeId};
use crate::schedule::Schedule;

/// Maps node indices of a (possibly re-indexed) sub-problem back to the
/// numbering and names of the original plan.
#[derive(Debug, Clone, Default)]
pub struct TaskLabels {
    /// Original index of the sub-problem's anchor.
    pub offset: usize,
    /// Original task names by original index.
    pub names: Vec<Option<String>>,
}

impl TaskLabels {
    pub fn new(names: Vec<Option<String>>) -> Self {
        Self { offset: 0, names }
    }

    pub fn with_offset(&self, offset: usize) -> Self {
        Self {
            offset,
            names: self.names.clone(),
        }
    }

    pub fn original_index(&self, node: NodeId) -> usize {
        node.index + self.offset
    }

    pub fn node(&self, node: NodeId) -> String {
        format!("x{}", self.original_index(node))
    }

    pub fn task(&self, node: NodeId) -> String {
        let index = self.original_index(node);
        match self.names.get(index).and_then(|n| n.as_deref()) {
            Some(name) => format!("Task {index} ({name})"),
            None => format!("Task {index}"),
        }
    }
}

/// `lower <= t(xj) - t(xi) <= upper`
pub fn format_constraint(c: &DifferenceConstraint, labels: &TaskLabels) -> String {
    let (lower, upper) = c.bounds();
    format!(
        "{lower} <= t({}) - t({}) <= {upper}",
        labels.node(NodeId::from_index(c.to())),
        labels.node(NodeId::from_index(c.from())),
    )
}

pub fn format_constraints(set: &ConstraintSet, labels: &TaskLabels) -> String {
    let mut out = String::from("Constraints:\n");
    for c in set {
        let _ = writeln!(out, "{}", format_constraint(c, labels));
    }
    out
}

/// 12-hour clock time of `offset` hours after `start_hour`, wrapping at
/// midnight.
pub fn format_clock(offset: i64, start_hour: i64) -> String {
    match (offset.rem_euclid(24) + start_hour.rem_euclid(24)) % 24 {
        0 => "12 AM".to_string(),
        h @ 1..=11 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

pub fn format_graph(graph: &ConstraintGraph, labels: &TaskLabels) -> String {
    let nodes: Vec<String> = graph.nodes().map(|n| labels.node(n)).collect();

    let mut out = String::from("Graph:\n");
    let _ = writeln!(out, "Nodes: [{}]", nodes.join(", "));
    out.push_str("Edges:\n");
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "{} -> {} (weight: {})",
            labels.node(NodeId::from_index(edge.from)),
            labels.node(NodeId::from_index(edge.to)),
            edge.weight
        );
    }
    out
}

pub fn format_schedule(schedule: &Schedule, labels: &TaskLabels) -> String {
    if schedule.is_empty() {
        return "No tasks left to schedule.\n".to_string();
    }

    let start = schedule.start_hour();
    let mut out = String::from("Start times (earliest - latest):\n");
    for (node, window) in schedule.iter() {
        let _ = writeln!(
            out,
            "{} [{}]: {} - {}",
            labels.task(node),
            labels.node(node),
            format_clock(window.earliest, start),
            format_clock(window.latest, start),
        );
    }
    out
}

pub fn format_infeasible(infeasible: &Infeasible, labels: &TaskLabels) -> String {
    let mut path: Vec<String> = infeasible.cycle.iter().map(|n| labels.node(*n)).collect();
    if let Some(first) = path.first().cloned() {
        path.push(first);
    }
    format!(
        "Negative cycle detected: {}\nNo solution exists for {} (cycle weight {}).\n",
        path.join(" -> "),
        infeasible.pass,
        infeasible.weight
    )
}
