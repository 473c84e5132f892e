//! Tracing initialization.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber: `RUST_LOG`-style env filter
/// with a fmt layer. Call once, from the binary entry point.
pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repix=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Flush hook invoked during graceful shutdown.
pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}
