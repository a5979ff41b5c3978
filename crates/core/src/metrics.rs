//! Prometheus metrics for the decision engine.

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts};

/// Monitoring gate outcomes.
pub static MONITORING_CHECKS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "inventorino_monitoring_checks_total",
            "Total monitoring gate checks",
        ),
        &["outcome"], // "monitored", "unmapped", "unmonitored", "all_ignored"
    )
    .unwrap()
});

/// Quality decision outcomes.
pub static QUALITY_DECISIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "inventorino_quality_decisions_total",
            "Total quality acceptance decisions",
        ),
        &["outcome"], // "accepted", "profile_rejected", "size_rejected", "upgrade_rejected", "no_episodes"
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(MONITORING_CHECKS.clone()),
        Box::new(QUALITY_DECISIONS.clone()),
    ]
}
