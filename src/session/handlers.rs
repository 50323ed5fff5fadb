// src/session/handlers.rs

//! Event handling logic for the session core.

use tracing::{info, warn};

use crate::graph::ConstraintGraph;
use crate::schedule::{reconstrain, solve};
use crate::session::core::SessionCore;
use crate::session::{SessionOutput, SessionStep};

/// Solve the current sub-problem as it stands.
///
/// An infeasible plan ends the session: there is nothing left to pin.
pub fn handle_solve(core: &mut SessionCore) -> SessionStep {
    let mut outputs = vec![SessionOutput::Constraints {
        constraints: core.constraints.clone(),
        frontier: core.frontier,
    }];

    if core.options.show_graph {
        outputs.push(SessionOutput::Graph {
            graph: ConstraintGraph::build(
                &core.constraints,
                core.num_tasks,
                core.start_hour,
                core.end_hour,
            ),
            frontier: core.frontier,
        });
    }

    match solve(
        &core.constraints,
        core.num_tasks,
        core.start_hour,
        core.end_hour,
    ) {
        Ok(schedule) => {
            info!(
                tasks = core.num_tasks,
                frontier = core.frontier,
                "schedule is feasible"
            );
            core.last_schedule = Some(schedule.clone());
            outputs.push(SessionOutput::Solved {
                schedule,
                frontier: core.frontier,
            });
            let keep_running = !core.options.exit_after_solve && core.num_tasks > 0;
            if keep_running {
                outputs.push(core.awaiting_pin());
            }
            SessionStep {
                outputs,
                keep_running,
            }
        }
        Err(infeasible) => {
            outputs.push(SessionOutput::Infeasible {
                infeasible,
                frontier: core.frontier,
            });
            SessionStep {
                outputs,
                keep_running: false,
            }
        }
    }
}

/// Pin `task` (original numbering) at clock `hour` and re-solve the tasks
/// after it.
///
/// The pin is committed only when the reduced problem is feasible; otherwise
/// the current sub-problem is kept and the user may try again.
pub fn handle_pin(core: &mut SessionCore, task: usize, hour: i64) -> SessionStep {
    if let Err(reason) = check_pin(core, task, hour) {
        warn!(task, hour, %reason, "pin rejected");
        return SessionStep {
            outputs: vec![SessionOutput::Rejected(reason), core.awaiting_pin()],
            keep_running: true,
        };
    }

    let local = task - core.frontier;
    let reduced = match reconstrain(&core.constraints, local, core.num_tasks, hour, core.end_hour)
    {
        Ok(reduced) => reduced,
        Err(e) => {
            return SessionStep {
                outputs: vec![SessionOutput::Rejected(e.to_string()), core.awaiting_pin()],
                keep_running: true,
            };
        }
    };
    let remaining = core.num_tasks - local;

    match solve(&reduced, remaining, hour, core.end_hour) {
        Ok(schedule) => {
            info!(task, hour, remaining, "pin applied");
            core.constraints = reduced;
            core.num_tasks = remaining;
            core.start_hour = hour;
            core.frontier = task;
            core.last_schedule = Some(schedule.clone());

            let mut outputs = vec![
                SessionOutput::Pinned { task, hour },
                SessionOutput::Constraints {
                    constraints: core.constraints.clone(),
                    frontier: core.frontier,
                },
            ];
            if core.options.show_graph {
                outputs.push(SessionOutput::Graph {
                    graph: ConstraintGraph::build(
                        &core.constraints,
                        core.num_tasks,
                        core.start_hour,
                        core.end_hour,
                    ),
                    frontier: core.frontier,
                });
            }
            outputs.push(SessionOutput::Solved {
                schedule,
                frontier: core.frontier,
            });

            let keep_running = remaining > 0;
            if keep_running {
                outputs.push(core.awaiting_pin());
            }
            SessionStep {
                outputs,
                keep_running,
            }
        }
        Err(infeasible) => {
            warn!(task, hour, "pin makes the remaining tasks infeasible; not applied");
            SessionStep {
                outputs: vec![
                    SessionOutput::Infeasible {
                        infeasible,
                        frontier: task,
                    },
                    SessionOutput::Rejected(format!(
                        "pinning task {task} at hour {hour} leaves no feasible schedule; pin not applied"
                    )),
                    core.awaiting_pin(),
                ],
                keep_running: true,
            }
        }
    }
}

fn check_pin(core: &SessionCore, task: usize, hour: i64) -> Result<(), String> {
    let first = core.frontier + 1;
    let last = core.frontier + core.num_tasks;
    if task < first || task > last {
        return Err(format!(
            "task {task} cannot be pinned; choose a task between {first} and {last}"
        ));
    }
    if hour < core.start_hour || hour > core.end_hour {
        return Err(format!(
            "hour {hour} is outside the remaining day ({}..={})",
            core.start_hour, core.end_hour
        ));
    }
    // Earlier tasks only constrain the pin through the last solved window.
    if let Some(window) = core
        .last_schedule
        .as_ref()
        .and_then(|s| s.window(task - core.frontier))
    {
        let earliest = core.start_hour + window.earliest;
        let latest = core.start_hour + window.latest;
        if hour < earliest || hour > latest {
            return Err(format!(
                "task {task} can only start between hour {earliest} and hour {latest}"
            ));
        }
    }
    Ok(())
}
