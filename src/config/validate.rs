// src/config/validate.rs

use crate::config::model::{DaySection, RawScheduleFile, ScheduleFile, TaskSection};
use crate::errors::{DayplanError, Result};
use crate::input::parse_clock_hour;
use crate::model::{DayWindow, TaskDuration};
use crate::plan::{Plan, TaskSpec};

impl TryFrom<RawScheduleFile> for ScheduleFile {
    type Error = DayplanError;

    fn try_from(raw: RawScheduleFile) -> std::result::Result<Self, Self::Error> {
        ensure_has_tasks(&raw)?;
        let tasks = validate_tasks(&raw.task)?;
        let window = validate_day(&raw.day)?;
        Ok(ScheduleFile {
            session: raw.session,
            plan: Plan::new(tasks, window),
        })
    }
}

fn ensure_has_tasks(raw: &RawScheduleFile) -> Result<()> {
    if raw.task.is_empty() {
        return Err(DayplanError::ConfigError(
            "schedule must contain at least one [[task]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_tasks(tasks: &[TaskSection]) -> Result<Vec<TaskSpec>> {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let duration: TaskDuration = task.duration.parse().map_err(|msg| {
                DayplanError::ConfigError(format!("task {} has {}", i + 1, msg))
            })?;
            Ok(TaskSpec {
                name: task.name.clone(),
                duration,
            })
        })
        .collect()
}

fn validate_day(day: &DaySection) -> Result<DayWindow> {
    let start = parse_clock_hour(&day.start)
        .map_err(|e| DayplanError::ConfigError(format!("[day].start: {e}")))?;
    let end = parse_clock_hour(&day.end)
        .map_err(|e| DayplanError::ConfigError(format!("[day].end: {e}")))?;
    DayWindow::new(start, end)
}
