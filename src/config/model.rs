// src/config/model.rs

use serde::Deserialize;

use crate::plan::Plan;

/// Schedule file as read from TOML, before validation.
///
/// ```toml
/// [session]
/// once = false
/// show_graph = true
///
/// [day]
/// start = "9 am"
/// end = "5 pm"
///
/// [[task]]
/// name = "write report"
/// duration = "2"
///
/// [[task]]
/// duration = "1-3"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleFile {
    /// Session behaviour from `[session]`.
    #[serde(default)]
    pub session: SessionSection,

    /// Working-hours window from `[day]`.
    pub day: DaySection,

    /// Tasks in order, from `[[task]]`.
    #[serde(default)]
    pub task: Vec<TaskSection>,
}

/// `[session]` section. Both flags are OR-ed with the matching CLI flags.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct SessionSection {
    /// Solve once and exit instead of waiting for pins.
    #[serde(default)]
    pub once: bool,

    /// Print the constraint graph with every solve.
    #[serde(default)]
    pub show_graph: bool,
}

/// `[day]` section: clock times like `"9 am"` / `"5 pm"`.
#[derive(Debug, Clone, Deserialize)]
pub struct DaySection {
    pub start: String,
    pub end: String,
}

/// One `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSection {
    #[serde(default)]
    pub name: Option<String>,

    /// `"2"` for a fixed duration, `"1-3"` for an inclusive range (hours).
    pub duration: String,
}

/// Validated schedule file. Only constructed via `TryFrom<RawScheduleFile>`.
#[derive(Debug, Clone)]
pub struct ScheduleFile {
    pub session: SessionSection,
    pub plan: Plan,
}
