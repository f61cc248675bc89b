//! # Proposal Admission Metrics
//!
//! Prometheus metrics for the process-proposal gate.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! qc-18-proposal-admission = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `proposal_admission_accepted_total` - Counter of accepted proposals
//! - `proposal_admission_rejected_total` - Counter of rejected proposals (by reason)
//! - `proposal_admission_latency_seconds` - Histogram of evaluation times

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total proposals accepted
    pub static ref PROPOSALS_ACCEPTED: IntCounter = register_int_counter!(
        "proposal_admission_accepted_total",
        "Total number of proposals accepted"
    )
    .expect("Failed to create PROPOSALS_ACCEPTED metric");

    /// Total proposals rejected, labeled by rejection reason
    pub static ref PROPOSALS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "proposal_admission_rejected_total",
        "Total number of proposals rejected",
        &["reason"]
    )
    .expect("Failed to create PROPOSALS_REJECTED metric");

    /// Histogram of proposal evaluation latency
    pub static ref EVALUATION_LATENCY: Histogram = register_histogram!(
        "proposal_admission_latency_seconds",
        "Time taken to evaluate a proposal in seconds",
        vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to create EVALUATION_LATENCY metric");
}

/// Record an accepted proposal
#[cfg(feature = "metrics")]
pub fn record_proposal_accepted() {
    PROPOSALS_ACCEPTED.inc();
}

/// Record a rejected proposal with reason
#[cfg(feature = "metrics")]
pub fn record_proposal_rejected(reason: &str) {
    PROPOSALS_REJECTED.with_label_values(&[reason]).inc();
}

/// Record evaluation latency
#[cfg(feature = "metrics")]
pub fn record_evaluation_latency(seconds: f64) {
    EVALUATION_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_proposal_accepted() {}

#[cfg(not(feature = "metrics"))]
pub fn record_proposal_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_evaluation_latency(_seconds: f64) {}
