//! Common utilities shared across the registration crates.
//!
//! This crate provides:
//! - Configuration structures loaded from the environment
//! - Tracing subscriber setup for binaries

pub mod config;
pub mod telemetry;

pub use config::*;
pub use telemetry::init_tracing;
