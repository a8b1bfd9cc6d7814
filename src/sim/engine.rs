//! Snapshot generation
//!
//! Each `simulate_*` function seeds its own generator from the wall clock
//! and returns a freshly computed snapshot. Values drift between time
//! buckets and hold steady within one, which keeps a polling dashboard
//! stable without any server-side state.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::sim::catalog::SECURITY_EVENTS;
use crate::sim::types::{
    AppSnapshot, CloudSnapshot, NetworkSnapshot, SecurityEvent, SecuritySnapshot, ServiceMetrics,
    Status, SystemSnapshot,
};

/// Per-service bucket size in seconds
const SERVICE_BUCKET_SECS: i64 = 5;
/// System domain bucket size in seconds
const SYSTEM_BUCKET_SECS: i64 = 3;
/// App domain bucket size in seconds
const APP_BUCKET_SECS: i64 = 3;
/// Network domain bucket size in seconds
const NETWORK_BUCKET_SECS: i64 = 3;
/// Cloud domain bucket size in seconds
const CLOUD_BUCKET_SECS: i64 = 5;
/// Security domain bucket size in seconds
const SECURITY_BUCKET_SECS: i64 = 7;

// Seed offsets keep domains sharing a bucket size from drawing the same
// sequence in the same instant.
const APP_SEED_OFFSET: i64 = 991;
const NETWORK_SEED_OFFSET: i64 = 42;
const CLOUD_SEED_OFFSET: i64 = 777;
const SECURITY_SEED_OFFSET: i64 = 2024;

/// Derive a non-negative seed component from a service id.
///
/// FNV-1a over the id bytes, reduced modulo 2^31 - 1. Stable for a given id
/// across calls and processes, which keeps each service's "personality"
/// steady across dashboard refreshes.
pub fn stable_seed(service_id: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    for byte in service_id.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash % ((1 << 31) - 1)
}

/// Generator seeded from the time bucket containing `now`, plus a domain
/// offset. All calls within the same bucket observe identical draws.
fn bucket_rng(now: DateTime<Utc>, bucket_secs: i64, offset: i64) -> StdRng {
    let bucket = now.timestamp().div_euclid(bucket_secs);
    StdRng::seed_from_u64(bucket.wrapping_add(offset) as u64)
}

/// Status from a combined badness score (higher is worse)
fn score_status(score: f64) -> Status {
    if score > 0.85 {
        Status::Down
    } else if score > 0.55 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Status from host gauges; down overrides warn
pub fn system_status(cpu: f64, mem: f64, disk: f64) -> Status {
    if cpu > 96.0 || mem > 96.0 {
        Status::Down
    } else if cpu > 90.0 || mem > 90.0 || disk > 92.0 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Status from application gauges; down overrides warn
pub fn app_status(p95_latency_ms: f64, error_rate_percent: f64) -> Status {
    if p95_latency_ms > 1400.0 || error_rate_percent > 8.0 {
        Status::Down
    } else if p95_latency_ms > 900.0 || error_rate_percent > 3.5 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Status from network gauges; down overrides warn
pub fn network_status(rtt_ms: f64, packet_loss_percent: f64, dns_ms: f64) -> Status {
    if rtt_ms > 480.0 || packet_loss_percent > 5.0 {
        Status::Down
    } else if rtt_ms > 220.0 || packet_loss_percent > 1.5 || dns_ms > 140.0 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Status from cloud resource counts; down overrides warn
pub fn cloud_status(unhealthy: u32, open_incidents: u32) -> Status {
    if unhealthy >= 3 || open_incidents >= 4 {
        Status::Down
    } else if unhealthy >= 1 || open_incidents >= 1 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Status from the highest severity rank present; down overrides warn
pub fn security_status(max_rank: u8) -> Status {
    if max_rank >= 3 {
        Status::Down
    } else if max_rank >= 1 {
        Status::Warn
    } else {
        Status::Ok
    }
}

/// Simulate metrics for a service id.
///
/// Accepts any id, not just ids from
/// [`BASE_SERVICES`](crate::sim::catalog::BASE_SERVICES): the dashboard may
/// reference locally-created services the backend never registered. The
/// stable seed component keeps unknown ids just as stable as known ones.
pub fn simulate_service_metrics(service_id: &str, now: DateTime<Utc>) -> ServiceMetrics {
    let bucket = now.timestamp().div_euclid(SERVICE_BUCKET_SECS);
    let mut rng = StdRng::seed_from_u64((stable_seed(service_id) as i64).wrapping_add(bucket) as u64);

    let mut latency: f64 = rng.random_range(20.0..260.0);
    let mut error: f64 = rng.random_range(0.0..2.5);
    let rps: f64 = rng.random_range(5.0..250.0);

    // occasional spikes
    if rng.random::<f64>() < 0.08 {
        latency *= rng.random_range(2.0..4.0);
        error *= rng.random_range(2.0..6.0);
    }

    let latency = latency.clamp(5.0, 2000.0);
    let error = error.clamp(0.0, 25.0);
    let rps = rps.clamp(0.1, 2000.0);

    let score = (latency / 900.0 * 0.6 + error / 10.0 * 0.4).clamp(0.0, 1.2);

    ServiceMetrics {
        ts: now,
        latency_ms: latency,
        error_rate: error,
        rps,
        status: score_status(score),
    }
}

/// Simulate host-level metrics
pub fn simulate_system(now: DateTime<Utc>) -> SystemSnapshot {
    let mut rng = bucket_rng(now, SYSTEM_BUCKET_SECS, 0);

    let base_cpu: f64 = rng.random_range(18.0..92.0);
    let cpu: f64 = (base_cpu + if rng.random::<f64>() < 0.12 { 10.0 } else { 0.0 }).clamp(1.0, 100.0);
    let mem: f64 = rng.random_range(30.0f64..88.0).clamp(1.0, 100.0);
    let disk: f64 = rng.random_range(40.0f64..93.0).clamp(1.0, 100.0);
    let uptime_hours = rng.random_range(12.0..240.0) as i64;

    SystemSnapshot {
        ts: now,
        cpu_percent: cpu,
        mem_percent: mem,
        disk_percent: disk,
        uptime_human: format!("{}h", uptime_hours),
        status: system_status(cpu, mem, disk),
    }
}

/// Simulate application-level metrics
pub fn simulate_app(now: DateTime<Utc>) -> AppSnapshot {
    let mut rng = bucket_rng(now, APP_BUCKET_SECS, APP_SEED_OFFSET);

    let p95: f64 = (rng.random_range(90.0f64..850.0)
        * if rng.random::<f64>() < 0.06 { 3.2 } else { 1.0 })
    .clamp(10.0, 3000.0);
    let rps: f64 = rng.random_range(20.0f64..520.0).clamp(1.0, 5000.0);
    let err: f64 = (rng.random_range(0.05f64..3.5) * if rng.random::<f64>() < 0.05 { 4.0 } else { 1.0 })
        .clamp(0.0, 30.0);
    let version = format!(
        "v1.{}.{}",
        rng.random_range(2..=9u32),
        rng.random_range(0..=30u32)
    );

    AppSnapshot {
        ts: now,
        p95_latency_ms: p95,
        rps,
        error_rate_percent: err,
        version,
        status: app_status(p95, err),
    }
}

/// Simulate network metrics
pub fn simulate_network(now: DateTime<Utc>) -> NetworkSnapshot {
    let mut rng = bucket_rng(now, NETWORK_BUCKET_SECS, NETWORK_SEED_OFFSET);

    let rtt: f64 = (rng.random_range(12.0f64..180.0)
        * if rng.random::<f64>() < 0.05 { 3.0 } else { 1.0 })
    .clamp(1.0, 2000.0);
    let loss: f64 = (rng.random_range(0.0f64..1.2) * if rng.random::<f64>() < 0.03 { 5.0 } else { 1.0 })
        .clamp(0.0, 30.0);
    let dns: f64 = (rng.random_range(8.0f64..90.0) * if rng.random::<f64>() < 0.05 { 2.6 } else { 1.0 })
        .clamp(1.0, 1200.0);

    NetworkSnapshot {
        ts: now,
        rtt_ms: rtt,
        packet_loss_percent: loss,
        dns_ms: dns,
        status: network_status(rtt, loss, dns),
    }
}

/// Simulate cloud resource metrics
pub fn simulate_cloud(now: DateTime<Utc>) -> CloudSnapshot {
    let mut rng = bucket_rng(now, CLOUD_BUCKET_SECS, CLOUD_SEED_OFFSET);

    let total: u32 = rng.random_range(6..=14);
    let mut unhealthy = 0u32;
    for _ in 0..total {
        if rng.random::<f64>() < 0.12 {
            unhealthy += 1;
        }
    }
    let healthy = total - unhealthy;
    let cost = (rng.random_range(120.0..680.0) + f64::from(unhealthy) * rng.random_range(10.0..40.0))
        .clamp(20.0, 5000.0);
    let incidents = unhealthy + if rng.random::<f64>() < 0.08 { 1 } else { 0 };

    CloudSnapshot {
        ts: now,
        total_count: total,
        healthy_count: healthy,
        estimated_cost_per_day_usd: cost,
        open_incidents: incidents,
        status: cloud_status(unhealthy, incidents),
    }
}

/// Simulate security events.
///
/// Samples 2-5 distinct events from the fixed catalog and stamps each one
/// with a timestamp up to 90 minutes in the past.
pub fn simulate_security(now: DateTime<Utc>) -> SecuritySnapshot {
    let mut rng = bucket_rng(now, SECURITY_BUCKET_SECS, SECURITY_SEED_OFFSET);

    let count: usize = rng.random_range(2..=5);
    let chosen: Vec<_> = SECURITY_EVENTS.choose_multiple(&mut rng, count).collect();

    let events: Vec<SecurityEvent> = chosen
        .into_iter()
        .map(|template| {
            let minutes_ago: i64 = rng.random_range(0..=90);
            SecurityEvent {
                id: template.id,
                severity: template.severity,
                title: template.title,
                detail: template.detail,
                ts: now - Duration::minutes(minutes_ago),
                source: "backend",
            }
        })
        .collect();

    let max_rank = events.iter().map(|e| e.severity.rank()).max().unwrap_or(0);

    SecuritySnapshot {
        ts: now,
        status: security_status(max_rank),
        events,
    }
}
