//! Subscriber installation.

use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Output is single-line human-readable text: the consumers here are
/// interactive demos and test runs, not log shipping. Uses `try_init` so a
/// second install attempt is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
