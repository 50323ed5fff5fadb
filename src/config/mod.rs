// src/config/mod.rs

//! Schedule file loading and validation.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a schedule file from disk (`loader.rs`).
//! - Validate it into a [`Plan`](crate::plan::Plan) (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{DaySection, RawScheduleFile, ScheduleFile, SessionSection, TaskSection};
