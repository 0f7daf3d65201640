//! Tracing setup for host programs
//!
//! The library only emits `tracing` events. Binaries that have no subscriber
//! of their own can call [`init`].

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize a tracing subscriber that writes compact logs to stderr.
///
/// The level comes from `RUST_LOG`, defaulting to [`DEFAULT_FILTER`].
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
