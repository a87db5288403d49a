//! Shared test-process setup.

use std::sync::Once;

use tracing::info;
use tracing_subscriber::EnvFilter;

static TEST_SETUP: Once = Once::new();

/// Install the env-filtered test logging subscriber exactly once.
///
/// Honors `RUST_LOG`; defaults to `debug` so the tap events are visible
/// when tests run with `--nocapture`. Safe to call from every test.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
        info!("test setup complete");
    });
}
