//! HTTP request handlers for the FleetPulse API
//!
//! Handlers are thin wrappers over the simulator: read the clock, run the
//! simulation, serialize. None of them can fail.

use axum::{extract::Path, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::sim::catalog::BASE_SERVICES;
use crate::sim::{
    simulate_app, simulate_cloud, simulate_network, simulate_security, simulate_service_metrics,
    simulate_system, AppSnapshot, CloudSnapshot, NetworkSnapshot, SecuritySnapshot,
    ServiceDescriptor, ServiceMetrics, SystemSnapshot,
};

/// Response body for `GET /api/services`
#[derive(Serialize)]
pub struct ServicesResponse {
    /// Response timestamp
    pub ts: DateTime<Utc>,
    /// The built-in service catalog
    pub services: &'static [ServiceDescriptor],
}

/// Response body for `GET /`
#[derive(Serialize)]
pub struct ServiceInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Available endpoints
    pub endpoints: Vec<String>,
}

/// `GET /` - service info
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "FleetPulse".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: vec![
            "/api/system".to_string(),
            "/api/app".to_string(),
            "/api/network".to_string(),
            "/api/cloud".to_string(),
            "/api/security".to_string(),
            "/api/services".to_string(),
            "/api/services/:service_id/metrics".to_string(),
        ],
    })
}

/// `GET /api/system` - host-level metrics
pub async fn get_system() -> Json<SystemSnapshot> {
    Json(simulate_system(Utc::now()))
}

/// `GET /api/app` - application metrics
pub async fn get_app() -> Json<AppSnapshot> {
    Json(simulate_app(Utc::now()))
}

/// `GET /api/network` - network metrics
pub async fn get_network() -> Json<NetworkSnapshot> {
    Json(simulate_network(Utc::now()))
}

/// `GET /api/cloud` - cloud resource metrics
pub async fn get_cloud() -> Json<CloudSnapshot> {
    Json(simulate_cloud(Utc::now()))
}

/// `GET /api/security` - recent security events
pub async fn get_security() -> Json<SecuritySnapshot> {
    Json(simulate_security(Utc::now()))
}

/// `GET /api/services` - the built-in service catalog
pub async fn list_services() -> Json<ServicesResponse> {
    Json(ServicesResponse {
        ts: Utc::now(),
        services: &BASE_SERVICES,
    })
}

/// `GET /api/services/:service_id/metrics` - metrics for any service id.
///
/// Works for catalog services and for ids the dashboard created locally;
/// unknown ids get a simulated snapshot rather than a 404.
pub async fn get_service_metrics(Path(service_id): Path<String>) -> Json<ServiceMetrics> {
    Json(simulate_service_metrics(&service_id, Utc::now()))
}
