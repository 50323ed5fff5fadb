// src/graph/bellman_ford.rs

//! Single-source shortest paths with negative-cycle detection.
//!
//! Distances are relaxed for at most `|V| - 1` rounds over the full edge list
//! (stopping early once a round changes nothing). One more pass then checks
//! every edge: if any can still be relaxed, a negative cycle is reachable
//! from the source and no distance map is returned.

use tracing::{debug, trace, warn};

use crate::graph::builder::{ConstraintGraph, Edge};

/// Shortest distances and predecessors from one source.
///
/// `None` distance means unreachable (+inf).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: usize,
    pub distances: Vec<Option<i64>>,
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn distance(&self, node: usize) -> Option<i64> {
        self.distances.get(node).copied().flatten()
    }

    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessors.get(node).copied().flatten()
    }
}

/// A cycle of negative total weight, nodes in edge order. The last node links
/// back to the first; the sequence starts at its smallest node index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NegativeCycle {
    pub nodes: Vec<usize>,
    pub weight: i64,
}

pub fn bellman_ford(
    graph: &ConstraintGraph,
    source: usize,
) -> Result<ShortestPaths, NegativeCycle> {
    let n = graph.node_count();
    let edges: Vec<Edge> = graph.edges().collect();

    let mut distances: Vec<Option<i64>> = vec![None; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];

    if source < n {
        distances[source] = Some(0);
    }

    for round in 1..n {
        let mut changed = false;
        for edge in &edges {
            if relax(&mut distances, &mut predecessors, edge) {
                changed = true;
            }
        }
        trace!(round, changed, "bellman-ford round");
        if !changed {
            break;
        }
    }

    for edge in &edges {
        if relax(&mut distances, &mut predecessors, edge) {
            let cycle = recover_cycle(graph, &predecessors, edge);
            warn!(
                nodes = ?cycle.nodes,
                weight = cycle.weight,
                "negative cycle detected"
            );
            return Err(cycle);
        }
    }

    debug!(source, nodes = n, edges = edges.len(), "shortest paths computed");

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Relax `edge`; returns whether the target distance improved.
fn relax(distances: &mut [Option<i64>], predecessors: &mut [Option<usize>], edge: &Edge) -> bool {
    let Some(from) = distances[edge.from] else {
        return false;
    };
    // Weights are bounded by the model; an overflow can only come from a
    // runaway path and never improves a distance.
    let Some(candidate) = from.checked_add(edge.weight) else {
        return false;
    };
    if distances[edge.to].is_none_or(|current| candidate < current) {
        distances[edge.to] = Some(candidate);
        predecessors[edge.to] = Some(edge.from);
        return true;
    }
    false
}

/// Walk predecessors back from the endpoint of the still-relaxable edge until
/// a node repeats; the repeated node is on the cycle.
fn recover_cycle(
    graph: &ConstraintGraph,
    predecessors: &[Option<usize>],
    violating: &Edge,
) -> NegativeCycle {
    let n = predecessors.len();
    let mut seen = vec![false; n];
    let mut current = violating.to;

    let entry = loop {
        if seen[current] {
            break Some(current);
        }
        seen[current] = true;
        match predecessors[current] {
            Some(prev) => current = prev,
            None => break None,
        }
    };

    let mut nodes = match entry {
        Some(entry) => {
            let mut backwards = vec![entry];
            let mut node = predecessors[entry];
            while let Some(prev) = node {
                if prev == entry || backwards.len() >= n {
                    break;
                }
                backwards.push(prev);
                node = predecessors[prev];
            }
            backwards.reverse();
            backwards
        }
        None => vec![violating.from, violating.to],
    };

    if let Some(start) = nodes
        .iter()
        .enumerate()
        .min_by_key(|(_, node)| **node)
        .map(|(pos, _)| pos)
    {
        nodes.rotate_left(start);
    }

    let weight = nodes
        .iter()
        .zip(nodes.iter().cycle().skip(1))
        .map(|(&from, &to)| graph.weight(from, to).unwrap_or(0))
        .fold(0i64, i64::saturating_add);

    NegativeCycle { nodes, weight }
}
