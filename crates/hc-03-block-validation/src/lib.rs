//! # HC-03 Block Validation
//!
//! The block-acceptance gate.
//!
//! **Subsystem ID:** 3  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)  
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! A block's transactions are trusted only once two checks pass:
//!
//! 1. **Body validation** ([`BlockValidator::validate_body`]): the header's
//!    uncle, transaction and ETX roots match the body, chains above the leaf
//!    tier carry a non-empty subordinate manifest matching the header, and
//!    the parent is present with state.
//! 2. **State validation** ([`BlockValidator::validate_state`]): gas used,
//!    log bloom, receipt root, state root, emitted ETXs and the ETX rollup
//!    all match what execution produced.
//!
//! [`calc_gas_limit`] computes the next block's gas limit.
//!
//! ## Failure Classes
//!
//! | Class | Errors | Caller action |
//! |-------|--------|---------------|
//! | Benign | `AlreadyKnown` | Ignore |
//! | DataUnavailable | `UnknownAncestor`, `PrunedAncestor`, `RollupUnavailable`, `StateRootComputation` | Retry later |
//! | Invalid | Root/gas/bloom/manifest mismatches | Discard block |
//! | Engine | `Engine(..)` | Discard block |
//!
//! ## Module Structure
//!
//! ```text
//! hc-03-block-validation/
//! ├── domain/      # Header, Block, Transaction, Receipt, Bloom, ChainConfig, errors
//! ├── ports/       # BlockAvailability, HeaderReader, Engine, RootHasher, ...
//! ├── adapters/    # Keccak Merkle root, logs bloom, in-memory chain, uncle rules
//! ├── service/     # BlockValidator
//! ├── gas.rs       # Gas limit adjustment
//! └── metrics.rs   # Prometheus counters (feature "metrics")
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod gas;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryHeaderChain, KeccakRootHasher, LogsBloom, UncleRulesEngine};
pub use domain::{
    calc_uncle_hash, emitted_etxs, Block, Bloom, Body, BodyError, BodyResult, ChainConfig,
    ConfigError, EngineError, ErrorClass, GasLimitParams, Header, HistoryError, Log, Receipt,
    ReceiptStatus, StateError, StateResult, StoreError, Transaction, TxType,
    GAS_LIMIT_BOUND_DIVISOR, MIN_GAS_LIMIT,
};
pub use gas::{calc_gas_limit, calc_gas_limit_with};
pub use ports::{
    BlockAvailability, BloomCalculator, ChainReader, Engine, EtxRollupProvider, HeaderReader,
    PostState, RootHasher,
};
pub use service::BlockValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
