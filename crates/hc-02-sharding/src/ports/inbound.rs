//! # Inbound Ports
//!
//! API trait defining what the Sharding subsystem can do.

use hc_01_location::Location;
use shared_types::Address;

/// Sharding API - inbound port.
pub trait ShardingApi: Send + Sync {
    /// Location of the chain owning `address`, if any.
    fn resolve(&self, address: &Address) -> Option<Location>;

    /// Whether `address` belongs to this node's chain (the zero address always does).
    fn is_in_chain_scope(&self, address: &Address) -> bool;

    /// Whether a transfer from `from` to `to` crosses chains.
    fn is_cross_shard(&self, from: &Address, to: &Address) -> bool;

    /// The node's own location.
    fn node_location(&self) -> Location;
}
