//! Test Logging
//!
//! Installs a tracing subscriber for test runs so that parse rejections and
//! record transitions show up in failing test output. Verbosity follows
//! `RUST_LOG`, defaulting to `warn`.

use once_cell::sync::Lazy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_TEST_LOG_LEVEL: &str = "warn";

static TEST_TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_LOG_LEVEL));

    // Another harness may already own the global subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer().with_target(true))
        .try_init();
});

/// Initializes test logging once per process. Safe to call from every test.
pub fn init_test_tracing() {
    Lazy::force(&TEST_TRACING);
}
