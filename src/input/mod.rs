// src/input/mod.rs

//! Collecting a plan from text: clock-time parsing and interactive prompts.

pub mod parse;
pub mod prompt;

pub use parse::parse_clock_hour;
pub use prompt::prompt_plan;
