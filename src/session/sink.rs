// src/session/sink.rs

//! Pluggable output for the session shell.
//!
//! The shell hands every [`SessionOutput`] to a `ReportSink` instead of
//! printing directly, so tests can record outputs while production writes
//! rendered text to stdout.

use std::future::Future;
use std::pin::Pin;

use tokio::io::AsyncWriteExt;

use crate::errors::Result;
use crate::report::{
    TaskLabels, format_clock, format_constraints, format_graph, format_infeasible,
    format_schedule,
};
use crate::session::SessionOutput;

pub trait ReportSink: Send {
    fn emit(
        &mut self,
        output: SessionOutput,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Renders outputs with [`render_output`] and writes them to stdout.
pub struct StdoutSink {
    labels: TaskLabels,
}

impl StdoutSink {
    pub fn new(labels: TaskLabels) -> Self {
        Self { labels }
    }
}

impl ReportSink for StdoutSink {
    fn emit(
        &mut self,
        output: SessionOutput,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let text = render_output(&output, &self.labels);

        Box::pin(async move {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
            Ok(())
        })
    }
}

/// Text shown to the user for one output.
pub fn render_output(output: &SessionOutput, labels: &TaskLabels) -> String {
    match output {
        SessionOutput::Constraints {
            constraints,
            frontier,
        } => format!("\n{}", format_constraints(constraints, &labels.with_offset(*frontier))),
        SessionOutput::Graph { graph, frontier } => {
            format!("\n{}", format_graph(graph, &labels.with_offset(*frontier)))
        }
        SessionOutput::Solved { schedule, frontier } => {
            format!("\n{}", format_schedule(schedule, &labels.with_offset(*frontier)))
        }
        SessionOutput::Infeasible {
            infeasible,
            frontier,
        } => format!("\n{}", format_infeasible(infeasible, &labels.with_offset(*frontier))),
        SessionOutput::Pinned { task, hour } => {
            format!("\nPinned task {task} to start at {}.\n", format_clock(*hour, 0))
        }
        SessionOutput::Rejected(reason) => format!("{reason}\n"),
        SessionOutput::AwaitingPin { first, last } => {
            let example = if first == last {
                format!("'{first} 11 am'")
            } else {
                format!("'{first} 11 am' for tasks {first}-{last}")
            };
            format!("\nPin a task's start time (e.g. {example}), or 'q' to quit: ")
        }
    }
}
