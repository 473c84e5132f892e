//! Application assembly: state, routes, server.

pub mod routes;
pub mod server;

use std::sync::Arc;

use axum::Router;
use repix_core::Config;

use crate::state::AppState;

/// Build the application state and router.
pub fn initialize_app(config: Config) -> (Arc<AppState>, Router) {
    let state = Arc::new(AppState::new(config));
    let router = routes::setup_routes(state.clone());
    (state, router)
}
