// src/session/core.rs

//! Pure session state machine.
//!
//! Holds the current sub-problem (constraint set, task count, day window)
//! and the frontier, the original index of the most recently pinned task,
//! plus the last feasible schedule, which bounds where a pin may go.
//! It has no channels and does no IO, so it can be stepped directly in
//! tests.

use crate::errors::ConstraintError;
use crate::model::ConstraintSet;
use crate::plan::Plan;
use crate::schedule::Schedule;
use crate::session::handlers::{handle_pin, handle_solve};
use crate::session::{SessionEvent, SessionOptions, SessionOutput, SessionStep};

#[derive(Debug, Clone)]
pub struct SessionCore {
    pub(crate) constraints: ConstraintSet,
    pub(crate) num_tasks: usize,
    pub(crate) start_hour: i64,
    pub(crate) end_hour: i64,
    pub(crate) frontier: usize,
    pub(crate) last_schedule: Option<Schedule>,
    pub(crate) options: SessionOptions,
}

impl SessionCore {
    pub fn new(plan: &Plan, options: SessionOptions) -> Result<Self, ConstraintError> {
        Ok(Self {
            constraints: plan.constraints()?,
            num_tasks: plan.num_tasks(),
            start_hour: plan.window.start_hour(),
            end_hour: plan.window.end_hour(),
            frontier: 0,
            last_schedule: None,
            options,
        })
    }

    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Tasks in the current sub-problem.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Original index of the current anchor.
    pub fn frontier(&self) -> usize {
        self.frontier
    }

    /// Clock hour the current sub-problem starts at.
    pub fn start_hour(&self) -> i64 {
        self.start_hour
    }

    pub fn end_hour(&self) -> i64 {
        self.end_hour
    }

    /// Schedule of the current sub-problem, once it has been solved.
    pub fn last_schedule(&self) -> Option<&Schedule> {
        self.last_schedule.as_ref()
    }

    pub fn step(&mut self, event: SessionEvent) -> SessionStep {
        match event {
            SessionEvent::Solve => handle_solve(self),
            SessionEvent::Pin { task, hour } => handle_pin(self, task, hour),
            SessionEvent::Invalid { input, reason } => SessionStep {
                outputs: vec![
                    SessionOutput::Rejected(format!("could not understand {input:?}: {reason}")),
                    self.awaiting_pin(),
                ],
                keep_running: true,
            },
            SessionEvent::Quit => SessionStep {
                outputs: Vec::new(),
                keep_running: false,
            },
        }
    }

    pub(crate) fn awaiting_pin(&self) -> SessionOutput {
        SessionOutput::AwaitingPin {
            first: self.frontier + 1,
            last: self.frontier + self.num_tasks,
        }
    }
}
