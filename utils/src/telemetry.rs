//! Tracing bootstrap for the solution binaries.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber: formatted output filtered by `RUST_LOG`
/// (default `warn`), plus a Tracy layer when built with the `tracy` feature.
///
/// Calling it more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    #[cfg(feature = "tracy")]
    let registry = registry.with(tracing_tracy::TracyLayer::default());

    let _ = registry.try_init();
}
