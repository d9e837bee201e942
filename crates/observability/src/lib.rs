//! Process-wide tracing/logging setup.

pub mod tracing;

/// Initialize observability for the process (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}
