// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{RawScheduleFile, ScheduleFile};
use crate::errors::Result;

/// Load a schedule file and return the raw [`RawScheduleFile`].
///
/// This only performs TOML deserialization; durations and clock times are
/// still unparsed strings. Use [`load_and_validate`] for a checked plan.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawScheduleFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawScheduleFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), tasks = raw.task.len(), "schedule file read");

    Ok(raw)
}

/// Load a schedule file and validate it:
///
/// - at least one `[[task]]`,
/// - every `duration` parses (`"2"` or `"1-3"`),
/// - `[day]` start and end parse and start is before end.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ScheduleFile> {
    let raw = load_from_path(&path)?;
    ScheduleFile::try_from(raw)
}
