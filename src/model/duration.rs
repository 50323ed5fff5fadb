// src/model/duration.rs

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::model::constraint::MAX_HOURS;

/// Duration of a task in whole hours, either exact or an inclusive range.
///
/// Parses from `"2"` or `"1-3"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskDuration {
    Fixed(i64),
    Range { min: i64, max: i64 },
}

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*(?:-\s*(\d+)\s*)?$").expect("duration regex is valid")
});

impl FromStr for TaskDuration {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_RE.captures(s).ok_or_else(|| {
            format!("invalid duration: {s:?} (expected e.g. \"2\" or \"1-2\")")
        })?;

        let parse = |m: regex::Match<'_>| {
            m.as_str()
                .parse::<i64>()
                .map_err(|e| format!("invalid duration: {s:?} ({e})"))
        };

        let first = parse(caps.get(1).ok_or_else(|| format!("invalid duration: {s:?}"))?)?;
        let too_long = |hours: i64| {
            format!("invalid duration: {hours} hours (a task cannot last more than {MAX_HOURS} hours)")
        };
        if first > MAX_HOURS {
            return Err(too_long(first));
        }
        match caps.get(2) {
            None => Ok(TaskDuration::Fixed(first)),
            Some(m) => {
                let max = parse(m)?;
                if max > MAX_HOURS {
                    return Err(too_long(max));
                }
                if first > max {
                    return Err(format!(
                        "invalid duration range: {first}-{max} (the start of the range must be <= the end)"
                    ));
                }
                Ok(TaskDuration::Range { min: first, max })
            }
        }
    }
}

impl fmt::Display for TaskDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskDuration::Fixed(h) => write!(f, "{h}"),
            TaskDuration::Range { min, max } => write!(f, "{min}-{max}"),
        }
    }
}
