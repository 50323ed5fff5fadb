#![allow(dead_code)]

use dayplan::model::{ConstraintSet, DayWindow, TaskDuration};
use dayplan::plan::{Plan, TaskSpec};

/// Builder for `Plan` to simplify test setup.
///
/// Durations use the same text forms users type (`"2"`, `"1-3"`); the day
/// window uses 24-hour clock hours.
pub struct PlanBuilder {
    tasks: Vec<TaskSpec>,
    start_hour: i64,
    end_hour: i64,
}

impl PlanBuilder {
    /// Empty plan for a 9:00 - 17:00 day.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            start_hour: 9,
            end_hour: 17,
        }
    }

    pub fn task(mut self, duration: &str) -> Self {
        self.tasks.push(TaskSpec::new(parse_duration(duration)));
        self
    }

    pub fn named_task(mut self, name: &str, duration: &str) -> Self {
        self.tasks
            .push(TaskSpec::named(name, parse_duration(duration)));
        self
    }

    pub fn day(mut self, start_hour: i64, end_hour: i64) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    pub fn build(self) -> Plan {
        let window = DayWindow::new(self.start_hour, self.end_hour)
            .expect("Failed to build valid day window from builder");
        Plan::new(self.tasks, window)
    }

    /// Shortcut: the constraint set of the built plan.
    pub fn constraints(self) -> ConstraintSet {
        self.build()
            .constraints()
            .expect("Failed to build valid constraints from builder")
    }
}

impl Default for PlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_duration(text: &str) -> TaskDuration {
    text.parse()
        .unwrap_or_else(|e| panic!("invalid duration {text:?} in test: {e}"))
}
