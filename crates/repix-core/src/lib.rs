//! Repix Core Library
//!
//! This crate provides the configuration and error types shared across all
//! Repix components.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
