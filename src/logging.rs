// SPDX-License-Identifier: MPL-2.0
use tracing_subscriber::EnvFilter;

/// Initialise logging. Defaults to `info`; when `debug` is enabled the
/// level drops to `debug` and the `RUST_LOG` environment variable may
/// override it. Safe to call more than once.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        // Ignore RUST_LOG so an environment left over from another tool
        // cannot make release builds verbose.
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
