//! Shared tracing/logging setup for the exercise crates.

/// Initialize process-wide logging.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber installation.
pub mod tracing;
