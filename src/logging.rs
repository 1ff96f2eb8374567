//! Logging setup for the `tm` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary. Output goes to stderr so it never mixes with command output.
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=taskmark=debug`.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Defaults to `warn` when `RUST_LOG` is unset.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // A second init (e.g. from a test harness) is harmless
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .try_init();
}
