//! Built-in catalogs
//!
//! Two read-only tables, immutable after process start and safe for
//! unlimited concurrent reads. There is no server-side create/delete:
//! the dashboard keeps any additional services in local storage and the
//! simulator accepts arbitrary ids.

use crate::sim::types::{
    SecurityEventTemplate, ServiceDescriptor, ServiceKind, ServiceTargets, Severity,
};

/// The five built-in service descriptors
pub static BASE_SERVICES: [ServiceDescriptor; 5] = [
    ServiceDescriptor {
        id: "svc-auth",
        name: "auth-service",
        kind: ServiceKind::App,
        env: "prod",
        owner: "identity",
        targets: ServiceTargets {
            target_latency_ms: 220.0,
            target_error_rate: 0.8,
        },
    },
    ServiceDescriptor {
        id: "svc-orders",
        name: "orders-api",
        kind: ServiceKind::App,
        env: "prod",
        owner: "commerce",
        targets: ServiceTargets {
            target_latency_ms: 300.0,
            target_error_rate: 1.0,
        },
    },
    ServiceDescriptor {
        id: "svc-postgres",
        name: "postgres-primary",
        kind: ServiceKind::Db,
        env: "prod",
        owner: "platform",
        targets: ServiceTargets {
            target_latency_ms: 80.0,
            target_error_rate: 0.2,
        },
    },
    ServiceDescriptor {
        id: "svc-redis",
        name: "redis-cache",
        kind: ServiceKind::Cache,
        env: "prod",
        owner: "platform",
        targets: ServiceTargets {
            target_latency_ms: 25.0,
            target_error_rate: 0.1,
        },
    },
    ServiceDescriptor {
        id: "svc-gateway",
        name: "edge-gateway",
        kind: ServiceKind::Gateway,
        env: "prod",
        owner: "network",
        targets: ServiceTargets {
            target_latency_ms: 150.0,
            target_error_rate: 0.5,
        },
    },
];

/// The four security event templates
pub static SECURITY_EVENTS: [SecurityEventTemplate; 4] = [
    SecurityEventTemplate {
        id: "evt-1",
        severity: Severity::High,
        title: "Suspicious login burst",
        detail: "Multiple failed logins from new ASN",
    },
    SecurityEventTemplate {
        id: "evt-2",
        severity: Severity::Medium,
        title: "WAF rule triggered",
        detail: "Possible SQLi pattern blocked",
    },
    SecurityEventTemplate {
        id: "evt-3",
        severity: Severity::Critical,
        title: "Privilege escalation attempt",
        detail: "Admin endpoint access anomaly",
    },
    SecurityEventTemplate {
        id: "evt-4",
        severity: Severity::Info,
        title: "Key rotation reminder",
        detail: "KMS key rotation due in 7 days",
    },
];
