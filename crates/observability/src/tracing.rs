//! Tracing subscriber installation.

use tracing_subscriber::EnvFilter;

/// Default level when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber: JSON-formatted events with timestamps,
/// filtered via `RUST_LOG`.
///
/// Idempotent: a second call loses the `try_init` race and is ignored, so
/// tests can initialize freely.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
