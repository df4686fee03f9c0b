//! Structured logging setup.
//!
//! Configures a tracing-subscriber registry with:
//! - Environment-based filter (via RUST_LOG)
//! - Console fmt layer suited to CloudWatch log capture

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with the given default level.
///
/// `RUST_LOG` takes precedence when set; otherwise the configured level
/// applies crate-wide.
///
/// # Panics
///
/// Panics if tracing has already been initialized.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{log_level},stream_notifier=debug")));

    // CloudWatch renders ANSI escapes literally, so keep the output plain.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    tracing::info!(service = "stream-notifier", "Tracing initialized");
}

/// Initialize tracing for tests (only logs errors).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("error")
        .with_test_writer()
        .try_init();
}
