//! # HC-02 Sharding
//!
//! Binds addresses to the chains that own them.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)  
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Every chain owns an inclusive range of address first bytes. This crate
//! holds that partition as an immutable, validated [`PrefixTable`] and
//! answers:
//! - Which chain owns an address ([`resolve_location`])
//! - Whether an address is in this node's scope ([`is_in_chain_scope`])
//! - Whether a transfer crosses chains ([`is_cross_shard`])
//!
//! ## Reference Partition
//!
//! | Chain | Range | Chain | Range | Chain | Range |
//! |-------|-------|-------|-------|-------|-------|
//! | prime | 0-9 | paxos | 50-59 | hydra | 90-99 |
//! | cyprus | 10-19 | paxos1 | 60-69 | hydra1 | 100-109 |
//! | cyprus1 | 20-29 | paxos2 | 70-79 | hydra2 | 110-119 |
//! | cyprus2 | 30-39 | paxos3 | 80-89 | hydra3 | 120-129 |
//! | cyprus3 | 40-49 | | | | |
//!
//! First bytes 130-255 are reserved.
//!
//! ## Module Structure
//!
//! ```text
//! hc-02-sharding/
//! ├── domain/          # PrefixRange, PrefixTable, ShardingConfig, invariants
//! ├── algorithms/      # Search order and address resolution
//! ├── ports/           # ShardingApi
//! └── service.rs       # ShardResolver (table + node context)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::{is_cross_shard, is_in_chain_scope, resolve_location, search_order};
pub use domain::{
    invariant_complete_cover, invariant_disjoint_ranges, PrefixRange, PrefixTable, ShardError,
    ShardingConfig, NUM_LOCATIONS, REFERENCE_RANGES,
};
pub use ports::ShardingApi;
pub use service::ShardResolver;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
