//! Logging setup for the WASI runner.
//!
//! Log lines go to stderr; stdout carries the JSON protocol.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with sieve defaults.
///
/// Sets up tracing-subscriber with:
/// - Environment filter (RUST_LOG)
/// - Compact format on stderr
pub fn init() {
    init_with_filter("warn");
}

/// Initialize tracing with a custom default filter.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
