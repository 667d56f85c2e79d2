//! Diagnostic output for the command-line tools.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binaries. Diagnostics go to stderr so stdout carries nothing but the
//! human-readable report.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the default level is `warn`, or `debug` for this crate
/// when `verbose` is set. Calling it twice is harmless; the second call is
/// ignored.
pub fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "slidegrid=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
