// src/input/prompt.rs

//! Interactive collection of a [`Plan`] over any async line source.
//!
//! Every prompt re-asks until the answer is valid; only end of input or an
//! IO error aborts.

use tokio::io::{AsyncBufRead, AsyncWrite, AsyncWriteExt, Lines};
use tracing::debug;

use crate::errors::{DayplanError, Result};
use crate::input::parse::parse_clock_hour;
use crate::model::{DayWindow, TaskDuration};
use crate::plan::{Plan, TaskSpec};

pub async fn prompt_plan<R, W>(lines: &mut Lines<R>, out: &mut W) -> Result<Plan>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let num_tasks = prompt_task_count(lines, out).await?;

    let mut tasks = Vec::with_capacity(num_tasks);
    for i in 1..=num_tasks {
        let duration = prompt_duration(lines, out, i).await?;
        tasks.push(TaskSpec::new(duration));
    }

    let window = prompt_window(lines, out).await?;
    debug!(num_tasks, ?window, "plan collected interactively");

    Ok(Plan::new(tasks, window))
}

async fn prompt_task_count<R, W>(lines: &mut Lines<R>, out: &mut W) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let answer = ask(lines, out, "Enter the number of tasks: ").await?;
        match answer.trim().parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => say(out, "Invalid input. Please enter a positive integer.").await?,
        }
    }
}

async fn prompt_duration<R, W>(lines: &mut Lines<R>, out: &mut W, task: usize) -> Result<TaskDuration>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let question = format!(
        "Enter the duration (in hours) of task {task} (e.g., '2' or '1-2' for a range): "
    );
    loop {
        let answer = ask(lines, out, &question).await?;
        match answer.parse::<TaskDuration>() {
            Ok(duration) => return Ok(duration),
            Err(msg) => say(out, &msg).await?,
        }
    }
}

async fn prompt_window<R, W>(lines: &mut Lines<R>, out: &mut W) -> Result<DayWindow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let start = ask(
            lines,
            out,
            "Enter the hour you want to start your day (e.g., '5 am'): ",
        )
        .await?;
        let end = ask(
            lines,
            out,
            "Enter the hour you want to end your day (e.g., '10 pm'): ",
        )
        .await?;

        let window = parse_clock_hour(&start)
            .and_then(|s| parse_clock_hour(&end).map(|e| (s, e)))
            .and_then(|(s, e)| DayWindow::new(s, e));

        match window {
            Ok(window) => return Ok(window),
            Err(DayplanError::InvalidWindow { .. }) => {
                say(
                    out,
                    "Invalid time range! Please make sure the start time is earlier than the end time. Try again.",
                )
                .await?
            }
            Err(e) => say(out, &e.to_string()).await?,
        }
    }
}

async fn ask<R, W>(lines: &mut Lines<R>, out: &mut W, question: &str) -> Result<String>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    out.write_all(question.as_bytes()).await?;
    out.flush().await?;
    match lines.next_line().await? {
        Some(line) => Ok(line),
        None => Err(DayplanError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input ended before the plan was complete",
        ))),
    }
}

async fn say<W: AsyncWrite + Unpin>(out: &mut W, message: &str) -> Result<()> {
    out.write_all(message.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
