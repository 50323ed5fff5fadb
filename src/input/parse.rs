// src/input/parse.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{DayplanError, Result};

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,2})\s*(am|pm)\s*$").expect("clock regex is valid")
});

/// Convert `"hh am"` / `"hh pm"` to a 24-hour clock hour.
///
/// `12 am` is midnight (`0`), `12 pm` is noon (`12`).
pub fn parse_clock_hour(s: &str) -> Result<i64> {
    let invalid = || DayplanError::Parse(format!("invalid time: {s:?} (expected e.g. \"5 am\")"));

    let caps = CLOCK_RE.captures(s).ok_or_else(invalid)?;
    let hour: i64 = caps
        .get(1)
        .ok_or_else(invalid)?
        .as_str()
        .parse()
        .map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(DayplanError::Parse(format!(
            "invalid time: {s:?} (hour must be between 1 and 12)"
        )));
    }

    let pm = caps
        .get(2)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("pm"));

    Ok(match (pm, hour) {
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, 12) => 0,
        (false, h) => h,
    })
}
