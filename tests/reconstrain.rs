// tests/reconstrain.rs
mod common;
use crate::common::builders::PlanBuilder;
use crate::common::{init_tracing, two_task_day};

use std::error::Error;

use dayplan::errors::ConstraintError;
use dayplan::model::ConstraintSet;
use dayplan::{reconstrain, solve};

type TestResult = Result<(), Box<dyn Error>>;

fn shape(set: &ConstraintSet) -> Vec<(usize, usize, (i64, i64))> {
    set.iter().map(|c| (c.from(), c.to(), c.bounds())).collect()
}

#[test]
fn later_constraints_are_shifted_and_window_goes_first() -> TestResult {
    init_tracing();

    let constraints = PlanBuilder::new()
        .task("1")
        .task("2-3")
        .task("1")
        .task("0-2")
        .day(9, 17)
        .constraints();

    let reduced = reconstrain(&constraints, 2, 4, 13, 17)?;
    assert_eq!(
        shape(&reduced),
        vec![(0, 2, (0, 4)), (0, 1, (1, 1)), (1, 2, (0, 2))]
    );
    Ok(())
}

#[test]
fn constraints_touching_earlier_nodes_are_dropped() -> TestResult {
    let constraints = two_task_day().constraints()?;

    // (0,1) and the global (0,2) window both start before node 1.
    let reduced = reconstrain(&constraints, 1, 2, 11, 17)?;
    assert_eq!(shape(&reduced), vec![(0, 1, (0, 6)), (0, 1, (1, 3))]);
    Ok(())
}

#[test]
fn pinning_the_last_task_leaves_nothing_to_schedule() -> TestResult {
    let constraints = two_task_day().constraints()?;

    let reduced = reconstrain(&constraints, 2, 2, 14, 17)?;
    assert_eq!(shape(&reduced), vec![(0, 0, (0, 3))]);

    let schedule = solve(&reduced, 0, 14, 17)?;
    assert!(schedule.is_empty());
    Ok(())
}

#[test]
fn pin_at_end_of_day_gives_zero_width_window() -> TestResult {
    let constraints = PlanBuilder::new().task("1").task("0-2").constraints();

    let reduced = reconstrain(&constraints, 1, 2, 17, 17)?;
    assert_eq!(shape(&reduced)[0], (0, 1, (0, 0)));
    Ok(())
}

#[test]
fn pin_past_end_of_day_is_rejected() -> TestResult {
    let constraints = two_task_day().constraints()?;

    let err = reconstrain(&constraints, 1, 2, 18, 17).unwrap_err();
    assert_eq!(err, ConstraintError::InvalidRange { lo: 0, hi: -1 });
    Ok(())
}

#[test]
fn pin_leaving_too_little_time_is_infeasible() -> TestResult {
    // Task 2 needs at least one hour after task 1 starts, and task 1 runs
    // two hours: pinning task 1 at 5 pm cannot work.
    let constraints = two_task_day().constraints()?;

    let reduced = reconstrain(&constraints, 1, 2, 17, 17)?;
    let infeasible = solve(&reduced, 1, 17, 17).unwrap_err();
    assert_eq!(infeasible.weight, -1);
    Ok(())
}

#[test]
fn original_set_is_left_untouched() -> TestResult {
    let constraints = two_task_day().constraints()?;
    let before = constraints.clone();

    let _ = reconstrain(&constraints, 1, 2, 11, 17)?;
    assert_eq!(constraints, before);
    Ok(())
}
