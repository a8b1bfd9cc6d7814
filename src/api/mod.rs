//! # API Module
//!
//! This module provides the HTTP interface for FleetPulse.
//!
//! ## Endpoints Overview
//!
//! - `GET /` - Service name, version, and endpoint list
//! - `GET /api/system` - Host-level metrics snapshot
//! - `GET /api/app` - Application metrics snapshot
//! - `GET /api/network` - Network metrics snapshot
//! - `GET /api/cloud` - Cloud resource metrics snapshot
//! - `GET /api/security` - Recent security events snapshot
//! - `GET /api/services` - The built-in service catalog
//! - `GET /api/services/:service_id/metrics` - Metrics for any service id
//!
//! All responses are JSON. There are no error responses at this layer:
//! every request, including one for a service id the server has never seen,
//! yields a valid snapshot.

pub mod handlers;
pub mod server;

// Re-export commonly used items
pub use server::{create_app, start_server};
