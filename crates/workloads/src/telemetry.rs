//! Log output for workload components.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "info";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Spin captures a component's stderr into its log, so no other sink is
/// needed. Calling this more than once in an instance is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_filter(filter);

    // Fails only if a subscriber is already installed.
    let _ = registry().with(fmt_layer).try_init();
}
