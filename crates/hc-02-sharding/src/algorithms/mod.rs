//! # Algorithms
//!
//! Address-to-chain resolution over a [`PrefixTable`](crate::domain::PrefixTable).

pub mod resolution;

pub use resolution::{is_cross_shard, is_in_chain_scope, resolve_location, search_order};
