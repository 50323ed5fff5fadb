// src/graph/builder.rs

use std::collections::HashSet;

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::debug;

use crate::model::{ConstraintSet, NodeId};

/// A weighted edge `from -> to`, by dense node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

/// Directed graph of difference constraints.
///
/// Node `k` lives at `NodeIndex::new(k)`. There is at most one edge per
/// ordered pair of nodes. An edge `u -> v` of weight `w` encodes
/// `t(v) - t(u) <= w`, so shortest distances from the anchor are the latest
/// feasible offsets; on the [`reversed`](Self::reversed) graph they are the
/// negated earliest offsets.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    graph: DiGraph<NodeId, i64>,
}

impl ConstraintGraph {
    /// Build the latest-time graph for `num_tasks` tasks in the day window
    /// `[start_hour, end_hour]`.
    ///
    /// Seed edges `0 -> 1` (weight `start_hour`) and `0 -> N` (weight
    /// `end_hour - start_hour`) are added first. Each constraint
    /// `(i, j, [lower, upper])` then adds `i -> j` with `upper` and `j -> i`
    /// with `-lower`, except the reverse edge for the pair `(N, 0)`.
    ///
    /// A constraint edge replaces a seed edge on the same pair. Two
    /// constraint edges on the same pair keep the smaller weight.
    pub fn build(
        constraints: &ConstraintSet,
        num_tasks: usize,
        start_hour: i64,
        end_hour: i64,
    ) -> Self {
        let node_count = constraints
            .max_node()
            .map_or(num_tasks, |max| max.max(num_tasks))
            + 1;

        let mut builder = EdgeArena::with_nodes(node_count);

        if num_tasks >= 1 {
            builder.seed(0, 1, start_hour);
            builder.seed(0, num_tasks, end_hour - start_hour);
        }

        for c in constraints {
            let (lower, upper) = c.bounds();
            builder.constrain(c.from(), c.to(), upper);
            if !(c.from() == num_tasks && c.to() == 0) {
                builder.constrain(c.to(), c.from(), -lower);
            }
        }

        let graph = builder.graph;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            constraints = constraints.len(),
            "built constraint graph"
        );

        Self { graph }
    }

    /// Same nodes, every edge flipped, weights kept.
    pub fn reversed(&self) -> Self {
        let mut graph = self.graph.clone();
        graph.reverse();
        Self { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_weights().copied()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edge_references().map(|e| Edge {
            from: e.source().index(),
            to: e.target().index(),
            weight: *e.weight(),
        })
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: usize, to: usize) -> Option<i64> {
        if from >= self.node_count() || to >= self.node_count() {
            return None;
        }
        self.graph
            .find_edge(NodeIndex::new(from), NodeIndex::new(to))
            .map(|e| self.graph[e])
    }
}

/// Mutable edge storage used while building; tracks which edges are still
/// seed defaults.
struct EdgeArena {
    graph: DiGraph<NodeId, i64>,
    seeds: HashSet<EdgeIndex>,
}

impl EdgeArena {
    fn with_nodes(count: usize) -> Self {
        let mut graph = DiGraph::with_capacity(count, count * 2);
        for index in 0..count {
            graph.add_node(NodeId::from_index(index));
        }
        Self {
            graph,
            seeds: HashSet::new(),
        }
    }

    fn seed(&mut self, from: usize, to: usize, weight: i64) {
        let edge = self
            .graph
            .update_edge(NodeIndex::new(from), NodeIndex::new(to), weight);
        self.seeds.insert(edge);
    }

    fn constrain(&mut self, from: usize, to: usize, weight: i64) {
        let (a, b) = (NodeIndex::new(from), NodeIndex::new(to));
        match self.graph.find_edge(a, b) {
            Some(edge) if self.seeds.remove(&edge) => self.graph[edge] = weight,
            Some(edge) => {
                let current = self.graph[edge];
                self.graph[edge] = current.min(weight);
            }
            None => {
                self.graph.add_edge(a, b, weight);
            }
        }
    }
}
