//! # Hierarchy-Chain Test Suite
//!
//! Unified test crate for scenarios that span subsystems.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── hierarchy_benchmarks.rs  # Resolution and validation throughput
//! └── src/integration/
//!     ├── fixtures.rs              # Shared chain/block builders
//!     ├── zone_flow.rs             # hc-01 -> hc-02 -> hc-03 on a zone node
//!     ├── dominant_flow.rs         # Manifest and rollup checks on region/prime
//!     └── telemetry.rs             # Logging setup around a validation run
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p hc-tests
//!
//! # Benchmarks
//! cargo bench -p hc-tests
//! ```

#![allow(dead_code)]
