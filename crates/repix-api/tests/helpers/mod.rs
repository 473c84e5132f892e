//! Shared test setup.

pub mod fixtures;

use axum_test::TestServer;
use repix_core::Config;

/// Spin up an in-process test server with default configuration.
pub fn setup_test_server() -> TestServer {
    let (_state, router) = repix_api::setup::initialize_app(Config::default());
    TestServer::new(router).expect("failed to start test server")
}
