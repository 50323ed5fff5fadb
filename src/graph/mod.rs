// src/graph/mod.rs

//! Constraint graph and shortest paths.
//!
//! - [`builder`] turns a [`ConstraintSet`](crate::model::ConstraintSet) into a
//!   weighted directed graph over dense node indices.
//! - [`bellman_ford`] runs single-source shortest paths on it and reports
//!   negative cycles.

pub mod bellman_ford;
pub mod builder;

pub use bellman_ford::{NegativeCycle, ShortestPaths, bellman_ford};
pub use builder::{ConstraintGraph, Edge};
