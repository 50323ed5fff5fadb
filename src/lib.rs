// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod model;
pub mod plan;
pub mod report;
pub mod schedule;
pub mod session;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{SessionSection, load_and_validate};
use crate::graph::ConstraintGraph;
use crate::input::prompt_plan;
use crate::plan::Plan;
use crate::report::{TaskLabels, format_constraints, format_graph};
use crate::session::{
    Session, SessionCore, SessionEvent, SessionOptions, StdoutSink, spawn_line_reader,
};

pub use crate::schedule::{Schedule, TaskWindow, reconstrain, solve};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - plan loading (schedule file) or interactive collection
/// - the session core and its async shell
/// - the stdin command reader
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let (plan, file_session) = match &args.schedule {
        Some(path) => {
            let file = load_and_validate(path)?;
            info!(path = %path, tasks = file.plan.num_tasks(), "schedule loaded");
            (file.plan, file.session)
        }
        None => {
            let mut stdout = tokio::io::stdout();
            let plan = prompt_plan(&mut lines, &mut stdout).await?;
            (plan, SessionSection::default())
        }
    };

    let labels = TaskLabels::new(plan.labels());

    if args.dry_run {
        print_dry_run(&plan, &labels)?;
        return Ok(());
    }

    let options = SessionOptions {
        exit_after_solve: args.once || file_session.once,
        show_graph: args.show_graph || file_session.show_graph,
    };
    let core = SessionCore::new(&plan, options)?;

    let (tx, rx) = mpsc::channel::<SessionEvent>(16);
    tx.send(SessionEvent::Solve).await?;

    if !options.exit_after_solve {
        spawn_line_reader(lines, tx.clone());
    }

    // Ctrl-C → quit.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(SessionEvent::Quit).await;
        });
    }

    let session = Session::new(core, rx, StdoutSink::new(labels));
    let finished = session.run().await?;
    debug!(frontier = finished.frontier(), "session state at exit");

    Ok(())
}

/// Print the constraints and the latest-time graph without solving.
fn print_dry_run(plan: &Plan, labels: &TaskLabels) -> Result<()> {
    let constraints = plan.constraints()?;
    let graph = ConstraintGraph::build(
        &constraints,
        plan.num_tasks(),
        plan.window.start_hour(),
        plan.window.end_hour(),
    );

    println!("dayplan dry-run");
    println!(
        "  day = {}:00 - {}:00 ({} hours)",
        plan.window.start_hour(),
        plan.window.end_hour(),
        plan.window.total_hours()
    );
    println!("  tasks = {}", plan.num_tasks());
    println!();
    print!("{}", format_constraints(&constraints, labels));
    println!();
    print!("{}", format_graph(&graph, labels));

    debug!("dry-run complete (no solving)");
    Ok(())
}
