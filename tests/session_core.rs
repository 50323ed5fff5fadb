// tests/session_core.rs

mod common;
use crate::common::builders::PlanBuilder;
use crate::common::{init_tracing, two_task_day};

use std::error::Error;

use dayplan::TaskWindow;
use dayplan::errors::SolvePass;
use dayplan::session::{SessionCore, SessionEvent, SessionOptions, SessionOutput};

type TestResult = Result<(), Box<dyn Error>>;

/// Short tag for each output so sequences are easy to compare.
fn kinds(outputs: &[SessionOutput]) -> Vec<&'static str> {
    outputs
        .iter()
        .map(|o| match o {
            SessionOutput::Constraints { .. } => "constraints",
            SessionOutput::Graph { .. } => "graph",
            SessionOutput::Solved { .. } => "solved",
            SessionOutput::Infeasible { .. } => "infeasible",
            SessionOutput::Pinned { .. } => "pinned",
            SessionOutput::Rejected(_) => "rejected",
            SessionOutput::AwaitingPin { .. } => "awaiting",
        })
        .collect()
}

fn two_task_core(options: SessionOptions) -> Result<SessionCore, Box<dyn Error>> {
    Ok(SessionCore::new(&two_task_day(), options)?)
}

#[test]
fn initial_solve_reports_and_waits_for_a_pin() -> TestResult {
    init_tracing();

    let mut core = two_task_core(SessionOptions::default())?;
    let step = core.step(SessionEvent::Solve);

    assert!(step.keep_running);
    assert_eq!(kinds(&step.outputs), vec!["constraints", "solved", "awaiting"]);

    match &step.outputs[1] {
        SessionOutput::Solved { schedule, frontier } => {
            assert_eq!(*frontier, 0);
            assert_eq!(schedule.window(1), Some(TaskWindow { earliest: 2, latest: 2 }));
            assert_eq!(schedule.window(2), Some(TaskWindow { earliest: 3, latest: 5 }));
        }
        other => panic!("expected Solved, got {other:?}"),
    }
    assert!(matches!(
        step.outputs[2],
        SessionOutput::AwaitingPin { first: 1, last: 2 }
    ));
    Ok(())
}

#[test]
fn show_graph_adds_the_graph_before_the_schedule() -> TestResult {
    let mut core = two_task_core(SessionOptions {
        show_graph: true,
        ..SessionOptions::default()
    })?;

    let step = core.step(SessionEvent::Solve);
    assert_eq!(
        kinds(&step.outputs),
        vec!["constraints", "graph", "solved", "awaiting"]
    );
    Ok(())
}

#[test]
fn once_mode_stops_after_the_first_solve() -> TestResult {
    let mut core = two_task_core(SessionOptions {
        exit_after_solve: true,
        ..SessionOptions::default()
    })?;

    let step = core.step(SessionEvent::Solve);
    assert!(!step.keep_running);
    assert_eq!(kinds(&step.outputs), vec!["constraints", "solved"]);
    Ok(())
}

#[test]
fn infeasible_plan_ends_the_session() -> TestResult {
    let plan = PlanBuilder::new().task("10").day(9, 17).build();
    let mut core = SessionCore::new(&plan, SessionOptions::default())?;

    let step = core.step(SessionEvent::Solve);
    assert!(!step.keep_running);
    assert_eq!(kinds(&step.outputs), vec!["constraints", "infeasible"]);

    match &step.outputs[1] {
        SessionOutput::Infeasible { infeasible, .. } => {
            assert_eq!(infeasible.pass, SolvePass::Earliest);
            assert_eq!(infeasible.weight, -2);
        }
        other => panic!("expected Infeasible, got {other:?}"),
    }
    Ok(())
}

#[test]
fn pin_reduces_the_problem_and_moves_the_frontier() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;
    core.step(SessionEvent::Solve);

    let step = core.step(SessionEvent::Pin { task: 1, hour: 11 });

    assert!(step.keep_running);
    assert_eq!(
        kinds(&step.outputs),
        vec!["pinned", "constraints", "solved", "awaiting"]
    );
    match &step.outputs[2] {
        SessionOutput::Solved { schedule, frontier } => {
            assert_eq!(*frontier, 1);
            assert_eq!(schedule.start_hour(), 11);
            assert_eq!(schedule.window(1), Some(TaskWindow { earliest: 1, latest: 3 }));
        }
        other => panic!("expected Solved, got {other:?}"),
    }
    assert!(matches!(
        step.outputs[3],
        SessionOutput::AwaitingPin { first: 2, last: 2 }
    ));

    assert_eq!(core.frontier(), 1);
    assert_eq!(core.num_tasks(), 1);
    assert_eq!(core.start_hour(), 11);
    assert_eq!(core.end_hour(), 17);
    assert_eq!(core.constraints().len(), 2);
    Ok(())
}

#[test]
fn infeasible_pin_is_not_applied() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;
    let before = core.constraints().clone();

    let step = core.step(SessionEvent::Pin { task: 1, hour: 17 });

    assert!(step.keep_running);
    assert_eq!(
        kinds(&step.outputs),
        vec!["infeasible", "rejected", "awaiting"]
    );
    assert_eq!(core.frontier(), 0);
    assert_eq!(core.num_tasks(), 2);
    assert_eq!(core.constraints(), &before);

    // The session still accepts a sensible pin afterwards.
    let retry = core.step(SessionEvent::Pin { task: 1, hour: 11 });
    assert_eq!(kinds(&retry.outputs)[0], "pinned");
    Ok(())
}

#[test]
fn pins_outside_the_remaining_problem_are_rejected() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;

    for (task, hour) in [(0, 11), (3, 11), (1, 8), (1, 18)] {
        let step = core.step(SessionEvent::Pin { task, hour });
        assert!(step.keep_running);
        assert_eq!(kinds(&step.outputs), vec!["rejected", "awaiting"], "pin {task} at {hour}");
    }
    assert_eq!(core.frontier(), 0);

    core.step(SessionEvent::Pin { task: 1, hour: 11 });

    // Task 1 is now behind the frontier and 10 am is before the new start.
    for (task, hour) in [(1, 12), (2, 10)] {
        let step = core.step(SessionEvent::Pin { task, hour });
        assert_eq!(kinds(&step.outputs), vec!["rejected", "awaiting"], "pin {task} at {hour}");
    }
    Ok(())
}

#[test]
fn pinning_the_last_task_finishes_the_session() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;

    let step = core.step(SessionEvent::Pin { task: 2, hour: 14 });

    assert!(!step.keep_running);
    assert_eq!(kinds(&step.outputs), vec!["pinned", "constraints", "solved"]);
    match &step.outputs[2] {
        SessionOutput::Solved { schedule, .. } => assert!(schedule.is_empty()),
        other => panic!("expected Solved, got {other:?}"),
    }
    assert_eq!(core.num_tasks(), 0);
    Ok(())
}

#[test]
fn successive_pins_walk_through_the_day() -> TestResult {
    let plan = PlanBuilder::new()
        .task("1")
        .task("2-3")
        .task("1")
        .task("0-2")
        .day(9, 17)
        .build();
    let mut core = SessionCore::new(&plan, SessionOptions::default())?;

    assert!(core.step(SessionEvent::Solve).keep_running);
    assert!(core.step(SessionEvent::Pin { task: 2, hour: 13 }).keep_running);
    assert_eq!(core.frontier(), 2);
    assert_eq!(core.num_tasks(), 2);

    let step = core.step(SessionEvent::Pin { task: 3, hour: 14 });
    assert!(step.keep_running);
    assert_eq!(core.frontier(), 3);
    assert!(matches!(
        step.outputs.last(),
        Some(SessionOutput::AwaitingPin { first: 4, last: 4 })
    ));

    let last = core.step(SessionEvent::Pin { task: 4, hour: 15 });
    assert!(!last.keep_running);
    Ok(())
}

#[test]
fn invalid_input_is_reported_and_ignored() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;

    let step = core.step(SessionEvent::Invalid {
        input: "soon".to_string(),
        reason: "no idea".to_string(),
    });

    assert!(step.keep_running);
    match &step.outputs[0] {
        SessionOutput::Rejected(msg) => {
            assert!(msg.contains("soon"));
            assert!(msg.contains("no idea"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(core.frontier(), 0);
    Ok(())
}

#[test]
fn quit_stops_without_output() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;

    let step = core.step(SessionEvent::Quit);
    assert!(!step.keep_running);
    assert!(step.outputs.is_empty());
    Ok(())
}

#[test]
fn pin_must_fall_inside_the_solved_window() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;
    core.step(SessionEvent::Solve);
    assert_eq!(
        core.last_schedule().and_then(|s| s.window(2)),
        Some(TaskWindow { earliest: 3, latest: 5 })
    );

    // Task 2 can start between noon and 2 pm; 9 am leaves no room for task 1.
    for (task, hour) in [(2, 9), (2, 15), (1, 12)] {
        let step = core.step(SessionEvent::Pin { task, hour });
        assert!(step.keep_running);
        assert_eq!(kinds(&step.outputs), vec!["rejected", "awaiting"], "pin {task} at {hour}");
        match &step.outputs[0] {
            SessionOutput::Rejected(msg) => assert!(msg.contains("can only start between")),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
    assert_eq!(core.frontier(), 0);

    let step = core.step(SessionEvent::Pin { task: 2, hour: 12 });
    assert_eq!(kinds(&step.outputs)[0], "pinned");
    assert_eq!(core.frontier(), 2);
    Ok(())
}

#[test]
fn solved_window_moves_with_the_frontier() -> TestResult {
    let mut core = two_task_core(SessionOptions::default())?;
    core.step(SessionEvent::Solve);
    core.step(SessionEvent::Pin { task: 1, hour: 11 });

    // After pinning task 1 at 11 am, task 2 fits between noon and 2 pm.
    assert_eq!(
        core.last_schedule().and_then(|s| s.window(1)),
        Some(TaskWindow { earliest: 1, latest: 3 })
    );
    let step = core.step(SessionEvent::Pin { task: 2, hour: 11 });
    assert_eq!(kinds(&step.outputs), vec!["rejected", "awaiting"]);

    let step = core.step(SessionEvent::Pin { task: 2, hour: 14 });
    assert!(!step.keep_running);
    assert_eq!(kinds(&step.outputs)[0], "pinned");
    Ok(())
}
