// src/model/window.rs

use crate::errors::{DayplanError, Result};

/// Working-hours window of a day, as 24-hour clock hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start_hour: i64,
    end_hour: i64,
}

impl DayWindow {
    /// Requires `0 <= start < end <= 23`.
    pub fn new(start_hour: i64, end_hour: i64) -> Result<Self> {
        if !(0..=23).contains(&start_hour) || !(0..=23).contains(&end_hour) || start_hour >= end_hour
        {
            return Err(DayplanError::InvalidWindow {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    #[inline]
    pub fn start_hour(&self) -> i64 {
        self.start_hour
    }

    #[inline]
    pub fn end_hour(&self) -> i64 {
        self.end_hour
    }

    pub fn total_hours(&self) -> i64 {
        self.end_hour - self.start_hour
    }
}
