//! Tracing setup for the probe binary and embedding hosts

use tracing_subscriber::EnvFilter;

/// Initialize a stderr tracing subscriber honoring `RUST_LOG`, defaulting
/// to `info`. Call once at startup; embedding hosts that install their own
/// subscriber should skip this.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
