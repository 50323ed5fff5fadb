//! Shared helpers for the `dayplan` integration tests.

pub mod builders;
pub mod recording_sink;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Solver and session logs for tests, captured by the test harness.
///
/// Reads `DAYPLAN_LOG` first, then `RUST_LOG`, and otherwise shows `dayplan`
/// debug output only, e.g. `DAYPLAN_LOG=trace cargo test -- --nocapture`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = std::env::var("DAYPLAN_LOG")
            .ok()
            .and_then(|s| EnvFilter::try_new(s).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("dayplan=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .init();
    });
}

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Await `f`, panicking if the session or reader under test hangs.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(TEST_TIMEOUT, f).await {
        Ok(value) => value,
        Err(_) => panic!("test did not finish within {TEST_TIMEOUT:?}"),
    }
}
