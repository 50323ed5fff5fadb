// src/session/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::errors::Result;

use super::core::SessionCore;
use super::sink::ReportSink;
use super::SessionEvent;

/// Async shell around [`SessionCore`]: reads events from `event_rx`, steps
/// the core and forwards every output to the sink.
pub struct Session<S: ReportSink> {
    core: SessionCore,
    event_rx: mpsc::Receiver<SessionEvent>,
    sink: S,
}

impl<S: ReportSink> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("core", &self.core)
            .finish_non_exhaustive()
    }
}

impl<S: ReportSink> Session<S> {
    pub fn new(core: SessionCore, event_rx: mpsc::Receiver<SessionEvent>, sink: S) -> Self {
        Self {
            core,
            event_rx,
            sink,
        }
    }

    /// Main event loop. Returns the final core state once the core asks to
    /// stop or the event channel closes.
    pub async fn run(mut self) -> Result<SessionCore> {
        info!("session started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                None => {
                    info!("session event channel closed; exiting");
                    break;
                }
            };

            debug!(?event, "session received event");

            let step = self.core.step(event);

            for output in step.outputs {
                self.sink.emit(output).await?;
            }

            if !step.keep_running {
                info!("session finished");
                break;
            }
        }

        Ok(self.core)
    }
}
