// src/plan.rs

//! A day plan as collected from the user: tasks in order plus the day window.

use crate::errors::ConstraintError;
use crate::model::{ConstraintSet, DayWindow, TaskDuration};

/// One task as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSpec {
    /// Optional label; reports fall back to `Task <n>`.
    pub name: Option<String>,
    pub duration: TaskDuration,
}

impl TaskSpec {
    pub fn new(duration: TaskDuration) -> Self {
        Self {
            name: None,
            duration,
        }
    }

    pub fn named(name: impl Into<String>, duration: TaskDuration) -> Self {
        Self {
            name: Some(name.into()),
            duration,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub tasks: Vec<TaskSpec>,
    pub window: DayWindow,
}

impl Plan {
    pub fn new(tasks: Vec<TaskSpec>, window: DayWindow) -> Self {
        Self { tasks, window }
    }

    pub fn num_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Duration chain followed by the global day window.
    pub fn constraints(&self) -> Result<ConstraintSet, ConstraintError> {
        let durations: Vec<TaskDuration> = self.tasks.iter().map(|t| t.duration).collect();
        ConstraintSet::from_durations(&durations, self.window.total_hours())
    }

    /// Labels by task index (1-based); index 0 is the anchor and has none.
    pub fn labels(&self) -> Vec<Option<String>> {
        std::iter::once(None)
            .chain(self.tasks.iter().map(|t| t.name.clone()))
            .collect()
    }
}
