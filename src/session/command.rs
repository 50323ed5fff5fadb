// src/session/command.rs

//! Turning user input lines into [`SessionEvent`]s.
//!
//! Accepted forms:
//! - `2 11 am` or `pin 2 11 am`: pin task 2 to start at 11 am
//! - `q`, `quit`, `exit`, `n`, `no`: stop
//! - empty line: ignored

use std::sync::LazyLock;

use regex::Regex;
use tokio::io::{AsyncBufRead, Lines};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::input::parse_clock_hour;
use crate::session::SessionEvent;

static PIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:pin\s+)?(\d+)\s+(.+?)\s*$").expect("pin regex is valid")
});

/// Parse one line. `None` means nothing to do (blank line).
pub fn parse_command(line: &str) -> Option<SessionEvent> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.to_lowercase().as_str() {
        "q" | "quit" | "exit" | "n" | "no" => return Some(SessionEvent::Quit),
        _ => {}
    }

    let invalid = |reason: String| SessionEvent::Invalid {
        input: trimmed.to_string(),
        reason,
    };

    let Some(caps) = PIN_RE.captures(trimmed) else {
        return Some(invalid(
            "expected '<task> <time>' (e.g. '2 11 am') or 'q'".to_string(),
        ));
    };

    let task = match caps.get(1).map(|m| m.as_str().parse::<usize>()) {
        Some(Ok(task)) => task,
        _ => return Some(invalid("task must be a positive integer".to_string())),
    };
    let time = caps.get(2).map_or("", |m| m.as_str());

    Some(match parse_clock_hour(time) {
        Ok(hour) => SessionEvent::Pin { task, hour },
        Err(e) => invalid(e.to_string()),
    })
}

/// Spawn a task forwarding parsed lines from `lines` to `tx`.
///
/// End of input (or a read error) sends [`SessionEvent::Quit`].
pub fn spawn_line_reader<R>(mut lines: Lines<R>, tx: mpsc::Sender<SessionEvent>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    debug!("input closed");
                    break;
                }
                Err(e) => {
                    debug!(error = %e, "failed to read input");
                    break;
                }
            };

            let Some(event) = parse_command(&line) else {
                continue;
            };
            let quit = event == SessionEvent::Quit;
            if tx.send(event).await.is_err() || quit {
                return;
            }
        }
        let _ = tx.send(SessionEvent::Quit).await;
    })
}
