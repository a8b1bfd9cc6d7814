//! # Metric Simulator
//!
//! The single core component of FleetPulse. Given a domain (system, app,
//! network, cloud, security, or a specific service id) and the current
//! wall-clock time, it produces a snapshot record with plausible,
//! time-stable-but-drifting values.
//!
//! Each simulation seeds a pseudo-random generator from
//! `floor(unix_time / bucket_seconds) + domain_offset`, so all requests
//! within the same bucket produce identical output, and output changes only
//! when a bucket boundary is crossed. Every call is request-scoped: it
//! allocates its own generator, performs pure arithmetic, and returns. The
//! only shared resources are the two read-only catalogs in [`catalog`].

pub mod catalog;
pub mod engine;
pub mod types;

// Re-export commonly used items
pub use engine::{
    simulate_app, simulate_cloud, simulate_network, simulate_security, simulate_service_metrics,
    simulate_system, stable_seed,
};
pub use types::{
    AppSnapshot, CloudSnapshot, NetworkSnapshot, SecurityEvent, SecuritySnapshot, ServiceDescriptor,
    ServiceKind, ServiceMetrics, ServiceTargets, Severity, Status, SystemSnapshot,
};
