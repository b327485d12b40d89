//! Log filter setup for the binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build the log filter from a `RUST_LOG`-style spec.
///
/// WARN applies to every target the spec leaves unset; a global level in the
/// spec (e.g. `debug`) replaces it. Unparseable directives are skipped.
#[must_use]
pub fn log_filter(spec: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .parse_lossy(spec.unwrap_or_default())
}

/// Install the stderr subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(spec.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}
