//! Shared application state.

use repix_core::Config;

/// State shared across all handlers.
///
/// The service is stateless apart from configuration: every normalization
/// request works entirely on its own buffers, so nothing per-request ever
/// lives here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
