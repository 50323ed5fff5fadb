use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use dayplan::errors::Result;
use dayplan::session::{ReportSink, SessionOutput};

/// A sink that records every output instead of printing it.
pub struct RecordingSink {
    outputs: Arc<Mutex<Vec<SessionOutput>>>,
}

impl RecordingSink {
    pub fn new(outputs: Arc<Mutex<Vec<SessionOutput>>>) -> Self {
        Self { outputs }
    }
}

impl ReportSink for RecordingSink {
    fn emit(
        &mut self,
        output: SessionOutput,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let outputs = Arc::clone(&self.outputs);

        Box::pin(async move {
            outputs.lock().unwrap().push(output);
            Ok(())
        })
    }
}
