//! Logging setup for the entrocheck CLI.
//!
//! Log records go to stderr so the protocol lines on stdout (`# bytes:` and
//! the verdict) stay machine-readable.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Defaults to INFO, or DEBUG when `verbose` is set; an explicit `RUST_LOG`
/// takes precedence over both.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
