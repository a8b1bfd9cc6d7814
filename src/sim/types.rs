//! Snapshot and catalog record types
//!
//! All entities are transient and computed on read; nothing is persisted.
//! Field names match the JSON the dashboard consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Derived health status of a snapshot.
///
/// Always a deterministic function of the snapshot's own numeric fields;
/// `down` takes precedence over `warn` in every derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// All values within normal operating range
    Ok,
    /// At least one value past its warning threshold
    Warn,
    /// At least one value past its critical threshold
    Down,
}

/// Severity of a security event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational, no action required
    Info,
    /// Worth a look
    Medium,
    /// Needs attention soon
    High,
    /// Needs attention now
    Critical,
}

impl Severity {
    /// Numeric rank used for status derivation (info=0 .. critical=3)
    pub fn rank(self) -> u8 {
        match self {
            Severity::Info => 0,
            Severity::Medium => 1,
            Severity::High => 2,
            Severity::Critical => 3,
        }
    }
}

/// Service type in the built-in catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Application service
    App,
    /// Database
    Db,
    /// Cache
    Cache,
    /// Edge gateway
    Gateway,
}

/// Per-service health targets
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceTargets {
    /// Target p50 latency in milliseconds
    pub target_latency_ms: f64,
    /// Target error rate in percent
    pub target_error_rate: f64,
}

/// A service in the built-in catalog.
///
/// The catalog is immutable for the process lifetime; the dashboard manages
/// additional entries client-side, outside this system's scope.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDescriptor {
    /// Stable service identifier
    pub id: &'static str,
    /// Human-readable service name
    pub name: &'static str,
    /// Service type
    #[serde(rename = "type")]
    pub kind: ServiceKind,
    /// Deployment environment
    pub env: &'static str,
    /// Owning team
    pub owner: &'static str,
    /// Health targets
    pub targets: ServiceTargets,
}

/// Fixed template a security event is stamped from
#[derive(Debug, Clone, Copy)]
pub struct SecurityEventTemplate {
    /// Stable event identifier
    pub id: &'static str,
    /// Event severity
    pub severity: Severity,
    /// Short event title
    pub title: &'static str,
    /// One-line event detail
    pub detail: &'static str,
}

/// A security event as returned to the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct SecurityEvent {
    /// Stable event identifier
    pub id: &'static str,
    /// Event severity
    pub severity: Severity,
    /// Short event title
    pub title: &'static str,
    /// One-line event detail
    pub detail: &'static str,
    /// When the event fired (at most 90 minutes before the snapshot)
    pub ts: DateTime<Utc>,
    /// Originating side, always `"backend"`
    pub source: &'static str,
}

/// Host-level metrics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SystemSnapshot {
    /// Snapshot timestamp
    pub ts: DateTime<Utc>,
    /// CPU utilization, 1-100
    pub cpu_percent: f64,
    /// Memory utilization, 1-100
    pub mem_percent: f64,
    /// Disk utilization, 1-100
    pub disk_percent: f64,
    /// Uptime rendered as whole hours, e.g. `"42h"`
    pub uptime_human: String,
    /// Derived health status
    pub status: Status,
}

/// Application-level metrics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct AppSnapshot {
    /// Snapshot timestamp
    pub ts: DateTime<Utc>,
    /// 95th percentile latency in milliseconds, 10-3000
    pub p95_latency_ms: f64,
    /// Requests per second, 1-5000
    pub rps: f64,
    /// Error rate in percent, 0-30
    pub error_rate_percent: f64,
    /// Deployed version string, e.g. `"v1.4.17"`
    pub version: String,
    /// Derived health status
    pub status: Status,
}

/// Network metrics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSnapshot {
    /// Snapshot timestamp
    pub ts: DateTime<Utc>,
    /// Round-trip time in milliseconds, 1-2000
    pub rtt_ms: f64,
    /// Packet loss in percent, 0-30
    pub packet_loss_percent: f64,
    /// DNS resolution time in milliseconds, 1-1200
    pub dns_ms: f64,
    /// Derived health status
    pub status: Status,
}

/// Cloud resource metrics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct CloudSnapshot {
    /// Snapshot timestamp
    pub ts: DateTime<Utc>,
    /// Total cloud resources, 6-14
    pub total_count: u32,
    /// Healthy cloud resources, total minus unhealthy
    pub healthy_count: u32,
    /// Estimated daily spend in USD, 20-5000
    pub estimated_cost_per_day_usd: f64,
    /// Open incident count
    pub open_incidents: u32,
    /// Derived health status
    pub status: Status,
}

/// Per-service metrics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMetrics {
    /// Snapshot timestamp
    pub ts: DateTime<Utc>,
    /// Request latency in milliseconds, 5-2000
    pub latency_ms: f64,
    /// Error rate in percent, 0-25
    pub error_rate: f64,
    /// Requests per second, 0.1-2000
    pub rps: f64,
    /// Derived health status
    pub status: Status,
}

/// Security events snapshot
#[derive(Debug, Clone, Serialize)]
pub struct SecuritySnapshot {
    /// Snapshot timestamp
    pub ts: DateTime<Utc>,
    /// Derived health status, from the highest severity present
    pub status: Status,
    /// Between 2 and 5 distinct events from the fixed catalog
    pub events: Vec<SecurityEvent>,
}
