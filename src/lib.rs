//! FleetPulse - Demo Telemetry API
//!
//! FleetPulse exposes a handful of HTTP endpoints that return synthetically
//! generated health metrics (system, application, network, cloud, security,
//! and per-service) for a fictitious infrastructure fleet. There is no real
//! instrumentation or persistence: every snapshot is computed on read from
//! pseudo-random draws seeded by coarse time buckets, so repeated calls
//! within a short window return stable-looking values.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod api;
pub mod sim;

// Re-export commonly used items for convenience
pub use self::core::{Config, Error, Result};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
