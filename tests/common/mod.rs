//! Helpers shared by the integration tests.

/// Initializes tracing based logging.
///
/// Override the level with the env var RUST_LOG, e.g., RUST_LOG=trace
/// shows every converted label.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
