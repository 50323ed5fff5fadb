// src/schedule/extract.rs

use std::collections::BTreeMap;

use crate::graph::ShortestPaths;
use crate::model::NodeId;

/// Feasible start offsets of one task, in hours from day start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskWindow {
    pub earliest: i64,
    pub latest: i64,
}

/// Per-task windows ordered by task index, plus the day-start hour they are
/// measured from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    start_hour: i64,
    total_hours: i64,
    windows: BTreeMap<usize, TaskWindow>,
}

impl Schedule {
    pub fn start_hour(&self) -> i64 {
        self.start_hour
    }

    pub fn total_hours(&self) -> i64 {
        self.total_hours
    }

    pub fn window(&self, task: usize) -> Option<TaskWindow> {
        self.windows.get(&task).copied()
    }

    pub fn earliest_offset(&self, task: usize) -> Option<i64> {
        self.window(task).map(|w| w.earliest)
    }

    pub fn latest_offset(&self, task: usize) -> Option<i64> {
        self.window(task).map(|w| w.latest)
    }

    /// Windows in numeric task order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, TaskWindow)> + '_ {
        self.windows
            .iter()
            .map(|(&index, &window)| (NodeId::from_index(index), window))
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Combine the reversed-graph run (`earliest`) and the forward-graph run
/// (`latest`), both from the anchor.
///
/// `earliest(k) = -dist_reversed[k]`, `latest(k) = dist_forward[k]`. A node
/// one of the runs never reached takes the matching window bound.
pub fn extract(
    earliest: &ShortestPaths,
    latest: &ShortestPaths,
    start_hour: i64,
    total_hours: i64,
) -> Schedule {
    let nodes = earliest.distances.len().max(latest.distances.len());

    let windows = (1..nodes)
        .map(|k| {
            let window = TaskWindow {
                earliest: earliest.distance(k).map_or(0, i64::saturating_neg),
                latest: latest.distance(k).unwrap_or(total_hours),
            };
            (k, window)
        })
        .collect();

    Schedule {
        start_hour,
        total_hours,
        windows,
    }
}
