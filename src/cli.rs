// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dayplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dayplan",
    version,
    about = "Compute earliest and latest start times for a day of tasks.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a schedule file (TOML).
    ///
    /// If omitted, tasks and the day window are asked for interactively.
    #[arg(long, value_name = "PATH")]
    pub schedule: Option<String>,

    /// Solve once and exit; do not ask for pinned start times.
    #[arg(long)]
    pub once: bool,

    /// Print the constraint graph with every solve.
    #[arg(long)]
    pub show_graph: bool,

    /// Print constraints and the constraint graph, but don't solve.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAYPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
