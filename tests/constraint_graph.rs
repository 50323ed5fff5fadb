// tests/constraint_graph.rs
mod common;
use crate::common::builders::PlanBuilder;
use crate::common::init_tracing;

use std::error::Error;

use dayplan::graph::{ConstraintGraph, Edge, bellman_ford};
use dayplan::model::{ConstraintSet, DifferenceConstraint};

type TestResult = Result<(), Box<dyn Error>>;

fn edge(from: usize, to: usize, weight: i64) -> Edge {
    Edge { from, to, weight }
}

#[test]
fn two_task_day_builds_expected_edges() {
    init_tracing();

    let constraints = PlanBuilder::new().task("2").task("1-3").day(9, 17).constraints();
    let graph = ConstraintGraph::build(&constraints, 2, 9, 17);

    assert_eq!(graph.node_count(), 3);
    let edges: Vec<Edge> = graph.edges().collect();
    assert_eq!(
        edges,
        vec![
            edge(0, 1, 2),
            edge(0, 2, 8),
            edge(1, 0, -2),
            edge(1, 2, 3),
            edge(2, 1, -1),
            edge(2, 0, 0),
        ]
    );
}

#[test]
fn reversed_graph_flips_every_edge_and_keeps_weights() {
    let constraints = PlanBuilder::new().task("2").task("1-3").constraints();
    let graph = ConstraintGraph::build(&constraints, 2, 9, 17);
    let reversed = graph.reversed();

    assert_eq!(reversed.node_count(), graph.node_count());
    assert_eq!(reversed.edge_count(), graph.edge_count());
    for e in graph.edges() {
        assert_eq!(reversed.weight(e.to, e.from), Some(e.weight));
    }
}

#[test]
fn reverse_edge_from_end_anchor_back_to_start_is_not_added() -> TestResult {
    let constraints: ConstraintSet = [
        DifferenceConstraint::fixed(0, 1, 1)?,
        DifferenceConstraint::fixed(1, 2, 1)?,
        DifferenceConstraint::ranged(2, 0, 0, 4)?,
    ]
    .into_iter()
    .collect();

    let graph = ConstraintGraph::build(&constraints, 2, 9, 17);

    assert_eq!(graph.weight(2, 0), Some(4));
    // 0 -> 2 keeps the seeded window weight; no `-lower` edge replaced it.
    assert_eq!(graph.weight(0, 2), Some(8));
    Ok(())
}

#[test]
fn constraint_edge_replaces_start_hour_seed() -> TestResult {
    // Starting at 1 am seeds 0 -> 1 with weight 1, which would contradict a
    // two-hour first task if it were kept.
    let constraints = PlanBuilder::new().task("2").day(1, 9).constraints();
    let graph = ConstraintGraph::build(&constraints, 1, 1, 9);

    assert_eq!(graph.weight(0, 1), Some(2));
    assert_eq!(graph.weight(1, 0), Some(-2));
    assert!(bellman_ford(&graph, 0).is_ok());
    Ok(())
}

#[test]
fn parallel_constraints_on_one_pair_keep_the_tighter_bound() -> TestResult {
    let constraints: ConstraintSet = [
        DifferenceConstraint::ranged(0, 1, 1, 10)?,
        DifferenceConstraint::ranged(0, 1, 0, 6)?,
    ]
    .into_iter()
    .collect();

    let graph = ConstraintGraph::build(&constraints, 1, 9, 17);

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.weight(0, 1), Some(6));
    assert_eq!(graph.weight(1, 0), Some(-1));
    Ok(())
}

#[test]
fn bellman_ford_computes_latest_offsets_and_predecessors() {
    let constraints = PlanBuilder::new().task("2").task("1-3").constraints();
    let graph = ConstraintGraph::build(&constraints, 2, 9, 17);

    let paths = bellman_ford(&graph, 0).expect("feasible graph");
    assert_eq!(paths.source, 0);
    assert_eq!(paths.distances, vec![Some(0), Some(2), Some(5)]);
    assert_eq!(paths.predecessors, vec![None, Some(0), Some(1)]);
    assert_eq!(paths.predecessor(2), Some(1));
}

#[test]
fn bellman_ford_on_reversed_graph_gives_negated_earliest_offsets() {
    let constraints = PlanBuilder::new().task("2").task("1-3").constraints();
    let reversed = ConstraintGraph::build(&constraints, 2, 9, 17).reversed();

    let paths = bellman_ford(&reversed, 0).expect("feasible graph");
    assert_eq!(paths.distances, vec![Some(0), Some(-2), Some(-3)]);
}

#[test]
fn unreachable_nodes_keep_infinite_distance() -> TestResult {
    let constraints: ConstraintSet = [DifferenceConstraint::fixed(2, 3, 1)?]
        .into_iter()
        .collect();
    let graph = ConstraintGraph::build(&constraints, 1, 9, 17);

    let paths = bellman_ford(&graph, 0).expect("no cycles");
    assert_eq!(paths.distance(0), Some(0));
    assert_eq!(paths.distance(1), Some(8));
    assert_eq!(paths.distance(2), None);
    assert_eq!(paths.distance(3), None);
    assert_eq!(paths.predecessor(3), None);
    Ok(())
}

#[test]
fn negative_cycle_is_reported_in_edge_order() {
    // 3 + 3 hours of work in a 5 hour day.
    let constraints = PlanBuilder::new().task("3").task("3").day(9, 14).constraints();
    let reversed = ConstraintGraph::build(&constraints, 2, 9, 14).reversed();

    let cycle = bellman_ford(&reversed, 0).expect_err("over-constrained");
    assert_eq!(cycle.nodes, vec![0, 1, 2]);
    assert_eq!(cycle.weight, -1);
}

#[test]
fn two_node_cycle_is_recovered() {
    let constraints = PlanBuilder::new().task("10").day(9, 17).constraints();
    let graph = ConstraintGraph::build(&constraints, 1, 9, 17);

    let cycle = bellman_ford(&graph, 0).expect_err("10 hours do not fit in 8");
    assert_eq!(cycle.nodes, vec![0, 1]);
    assert_eq!(cycle.weight, -2);
}

#[test]
fn repeated_runs_produce_identical_results() {
    let constraints = PlanBuilder::new()
        .task("1-2")
        .task("3")
        .task("0-4")
        .day(8, 18)
        .constraints();
    let before = constraints.clone();

    let first = bellman_ford(&ConstraintGraph::build(&constraints, 3, 8, 18), 0);
    let second = bellman_ford(&ConstraintGraph::build(&constraints, 3, 8, 18), 0);

    assert_eq!(first, second);
    assert_eq!(constraints, before);
}

#[test]
fn longest_durations_in_a_long_chain_solve_without_overflow() {
    // Forty tasks of up to a day each in a nine-hour day.
    let mut builder = PlanBuilder::new().day(8, 17);
    for _ in 0..40 {
        builder = builder.task("0-24");
    }
    let constraints = builder.constraints();
    let graph = ConstraintGraph::build(&constraints, 40, 8, 17);

    assert!(bellman_ford(&graph, 0).is_ok());
    assert!(bellman_ford(&graph.reversed(), 0).is_ok());

    let mut builder = PlanBuilder::new().day(8, 17);
    for _ in 0..40 {
        builder = builder.task("24");
    }
    let constraints = builder.constraints();
    let cycle = bellman_ford(&ConstraintGraph::build(&constraints, 40, 8, 17), 0)
        .expect_err("960 hours do not fit in 9");
    assert!(!cycle.nodes.is_empty());
}
