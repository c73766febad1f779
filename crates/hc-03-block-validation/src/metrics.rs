//! # Block Validation Metrics
//!
//! Prometheus metrics for monitoring block acceptance.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! hc-03-block-validation = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `block_validation_bodies_validated_total` - Counter of bodies accepted
//! - `block_validation_states_validated_total` - Counter of post-states accepted
//! - `block_validation_rejected_total` - Counter of failures (by stage and reason)
//! - `block_validation_latency_seconds` - Histogram of validation times

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_histogram, register_int_counter, register_int_counter_vec, Histogram, IntCounter,
    IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Block bodies that passed structural validation
    pub static ref BODIES_VALIDATED: IntCounter = register_int_counter!(
        "block_validation_bodies_validated_total",
        "Total number of block bodies that passed structural validation"
    )
    .expect("Failed to create BODIES_VALIDATED metric");

    /// Blocks whose post-state matched the header
    pub static ref STATES_VALIDATED: IntCounter = register_int_counter!(
        "block_validation_states_validated_total",
        "Total number of blocks whose post-execution state matched the header"
    )
    .expect("Failed to create STATES_VALIDATED metric");

    /// Validation failures, labeled by stage and reason
    pub static ref BLOCKS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "block_validation_rejected_total",
        "Total number of validation failures",
        &["stage", "reason"]
    )
    .expect("Failed to create BLOCKS_REJECTED metric");

    /// Histogram of validation latency
    pub static ref VALIDATION_LATENCY: Histogram = register_histogram!(
        "block_validation_latency_seconds",
        "Time taken to validate a block in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]
    )
    .expect("Failed to create VALIDATION_LATENCY metric");
}

/// Record a body that passed structural validation
#[cfg(feature = "metrics")]
pub fn record_body_validated() {
    BODIES_VALIDATED.inc();
}

/// Record a post-state that matched its header
#[cfg(feature = "metrics")]
pub fn record_state_validated() {
    STATES_VALIDATED.inc();
}

/// Record a validation failure
#[cfg(feature = "metrics")]
pub fn record_block_rejected(stage: &str, reason: &str) {
    BLOCKS_REJECTED.with_label_values(&[stage, reason]).inc();
}

/// Record validation latency
#[cfg(feature = "metrics")]
pub fn record_validation_latency(seconds: f64) {
    VALIDATION_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_body_validated() {}

#[cfg(not(feature = "metrics"))]
pub fn record_state_validated() {}

#[cfg(not(feature = "metrics"))]
pub fn record_block_rejected(_stage: &str, _reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_validation_latency(_seconds: f64) {}
