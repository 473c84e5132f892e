//! Repix Infrastructure Library
//!
//! Shared infrastructure components used across Repix services:
//! - Telemetry initialization (tracing subscriber)
//! - HTTP middleware (request IDs)

pub mod middleware;
pub mod telemetry;

pub use middleware::{request_id_middleware, RequestId};
pub use telemetry::{init_telemetry, shutdown_telemetry};
