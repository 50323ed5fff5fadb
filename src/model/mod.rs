// src/model/mod.rs

//! Constraint model: time-point identifiers, difference constraints and the
//! inputs they are built from.
//!
//! - [`node`] names the time points (the start-of-day anchor and tasks).
//! - [`constraint`] holds bounded difference constraints and constraint sets.
//! - [`duration`] is the fixed-or-ranged task duration as entered by users.
//! - [`window`] is the working-hours window of a day.

pub mod constraint;
pub mod duration;
pub mod node;
pub mod window;

pub use constraint::{Bound, ConstraintSet, DifferenceConstraint, MAX_HOURS};
pub use duration::TaskDuration;
pub use node::{NodeId, NodeKind};
pub use window::DayWindow;
