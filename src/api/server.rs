//! HTTP server implementation for the FleetPulse API

use axum::{routing::get, Router};
use std::future::Future;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::core::Result;

/// Creates the application router with all routes and middleware
pub fn create_app() -> Router {
    // Demo-only CORS so a static dashboard can call the API from anywhere.
    // Credentials stay disallowed (implied by the wildcard origin).
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root route
        .route("/", get(handlers::service_info))
        // Domain snapshots
        .route("/api/system", get(handlers::get_system))
        .route("/api/app", get(handlers::get_app))
        .route("/api/network", get(handlers::get_network))
        .route("/api/cloud", get(handlers::get_cloud))
        .route("/api/security", get(handlers::get_security))
        // Service catalog and per-service metrics
        .route("/api/services", get(handlers::list_services))
        .route(
            "/api/services/:service_id/metrics",
            get(handlers::get_service_metrics),
        )
        // Apply middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

/// Start the HTTP server and run it until `shutdown` resolves
pub async fn start_server(
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    tracing::info!("Starting FleetPulse API server on {}", addr);

    let app = create_app();

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(path: &str) -> (StatusCode, Value) {
        let response = create_app()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn system_endpoint_returns_snapshot() {
        let (status, body) = get_json("/api/system").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["cpu_percent"].is_number());
        assert!(["ok", "warn", "down"].contains(&body["status"].as_str().unwrap()));
        assert!(body["ts"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn domain_endpoints_all_respond() {
        for path in ["/api/app", "/api/network", "/api/cloud", "/api/security"] {
            let (status, body) = get_json(path).await;
            assert_eq!(status, StatusCode::OK, "{} failed", path);
            assert!(
                ["ok", "warn", "down"].contains(&body["status"].as_str().unwrap()),
                "{} returned bad status",
                path
            );
        }
    }

    #[tokio::test]
    async fn services_endpoint_lists_the_catalog() {
        let (status, body) = get_json("/api/services").await;
        assert_eq!(status, StatusCode::OK);

        let services = body["services"].as_array().unwrap();
        assert_eq!(services.len(), 5);
        let ids: Vec<&str> = services.iter().map(|s| s["id"].as_str().unwrap()).collect();
        assert_eq!(
            ids,
            ["svc-auth", "svc-orders", "svc-postgres", "svc-redis", "svc-gateway"]
        );
        assert_eq!(services[0]["type"], "app");
        assert!(services[0]["targets"]["target_latency_ms"].is_number());
    }

    #[tokio::test]
    async fn catalog_ids_are_stable_across_calls() {
        let (_, first) = get_json("/api/services").await;
        let (_, second) = get_json("/api/services").await;
        assert_eq!(first["services"], second["services"]);
    }

    #[tokio::test]
    async fn unknown_service_id_still_gets_metrics() {
        let (status, body) = get_json("/api/services/unknown-id/metrics").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["latency_ms"].is_number());
        assert!(body["error_rate"].is_number());
        assert!(body["rps"].is_number());
        assert!(["ok", "warn", "down"].contains(&body["status"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn security_events_have_wire_fields() {
        let (status, body) = get_json("/api/security").await;
        assert_eq!(status, StatusCode::OK);

        let events = body["events"].as_array().unwrap();
        assert!((2..=5).contains(&events.len()));
        for event in events {
            assert_eq!(event["source"], "backend");
            assert!(event["id"].as_str().unwrap().starts_with("evt-"));
            assert!(event["ts"].is_string());
        }
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/system")
            .header(header::ORIGIN, "https://dashboard.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
            .body(Body::empty())
            .unwrap();

        let response = create_app().oneshot(request).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn root_lists_endpoints() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["endpoints"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e == "/api/services"));
    }
}
