// src/model/constraint.rs

//! Difference constraints `lower <= t(to) - t(from) <= upper` and the ordered
//! sets they are collected in.

use crate::errors::ConstraintError;
use crate::model::duration::TaskDuration;

/// Largest bound a constraint may carry: one full day.
pub const MAX_HOURS: i64 = 24;

/// Bound on the difference between two time points, in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    Fixed(i64),
    /// Inclusive range.
    Ranged { lo: i64, hi: i64 },
}

impl Bound {
    /// `(lower, upper)` regardless of representation.
    pub fn bounds(&self) -> (i64, i64) {
        match *self {
            Bound::Fixed(hours) => (hours, hours),
            Bound::Ranged { lo, hi } => (lo, hi),
        }
    }
}

/// `t(to) - t(from)` lies within `bound`.
///
/// Constructed only through [`DifferenceConstraint::fixed`] and
/// [`DifferenceConstraint::ranged`], so `0 <= lower <= upper <= MAX_HOURS`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DifferenceConstraint {
    from: usize,
    to: usize,
    bound: Bound,
}

impl DifferenceConstraint {
    pub fn fixed(from: usize, to: usize, hours: i64) -> Result<Self, ConstraintError> {
        if !(0..=MAX_HOURS).contains(&hours) {
            return Err(ConstraintError::InvalidDuration { hours });
        }
        Ok(Self {
            from,
            to,
            bound: Bound::Fixed(hours),
        })
    }

    pub fn ranged(from: usize, to: usize, lo: i64, hi: i64) -> Result<Self, ConstraintError> {
        if lo < 0 || hi > MAX_HOURS || lo > hi {
            return Err(ConstraintError::InvalidRange { lo, hi });
        }
        Ok(Self {
            from,
            to,
            bound: Bound::Ranged { lo, hi },
        })
    }

    /// Constraint between consecutive time points `from` and `from + 1`
    /// for a task of the given duration.
    pub fn for_duration(from: usize, duration: TaskDuration) -> Result<Self, ConstraintError> {
        match duration {
            TaskDuration::Fixed(hours) => Self::fixed(from, from + 1, hours),
            TaskDuration::Range { min, max } => Self::ranged(from, from + 1, min, max),
        }
    }

    #[inline]
    pub fn from(&self) -> usize {
        self.from
    }

    #[inline]
    pub fn to(&self) -> usize {
        self.to
    }

    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    #[inline]
    pub fn bounds(&self) -> (i64, i64) {
        self.bound.bounds()
    }

    /// Same bound, endpoints moved down by `offset`.
    ///
    /// Callers guarantee both endpoints are `>= offset`.
    pub(crate) fn shifted_down(&self, offset: usize) -> Self {
        Self {
            from: self.from - offset,
            to: self.to - offset,
            bound: self.bound,
        }
    }
}

/// Ordered collection of difference constraints.
///
/// Order is insertion order. The solver ignores it; reports print in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: Vec<DifferenceConstraint>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One constraint per task between its start node `i - 1` and node `i`,
    /// followed by the global window `(0, N, [0, total_hours])`.
    pub fn from_durations(
        durations: &[TaskDuration],
        total_hours: i64,
    ) -> Result<Self, ConstraintError> {
        let mut set = Self::new();
        for (i, duration) in durations.iter().enumerate() {
            set.push(DifferenceConstraint::for_duration(i, *duration)?);
        }
        set.push(Self::window_constraint(durations.len(), total_hours)?);
        Ok(set)
    }

    /// Global constraint bounding the whole day: `0 <= t(N) - t(0) <= hours`.
    pub fn window_constraint(
        num_tasks: usize,
        hours: i64,
    ) -> Result<DifferenceConstraint, ConstraintError> {
        DifferenceConstraint::ranged(0, num_tasks, 0, hours)
    }

    pub fn push(&mut self, constraint: DifferenceConstraint) {
        self.constraints.push(constraint);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DifferenceConstraint> {
        self.constraints.iter()
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Largest node index mentioned by any constraint.
    pub fn max_node(&self) -> Option<usize> {
        self.constraints.iter().map(|c| c.from.max(c.to)).max()
    }
}

impl FromIterator<DifferenceConstraint> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = DifferenceConstraint>>(iter: I) -> Self {
        Self {
            constraints: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a DifferenceConstraint;
    type IntoIter = std::slice::Iter<'a, DifferenceConstraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}
