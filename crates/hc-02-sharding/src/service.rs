//! # Shard Resolver
//!
//! The prefix table bound to the node's own location.

use crate::algorithms;
use crate::domain::{PrefixTable, ShardError, ShardingConfig};
use crate::ports::ShardingApi;
use hc_01_location::{Location, NodeContext};
use shared_types::Address;
use tracing::info;

/// Resolves addresses from the point of view of one node.
#[derive(Clone, Debug)]
pub struct ShardResolver {
    table: PrefixTable,
    node: NodeContext,
}

impl ShardResolver {
    /// Create a resolver over an already validated table.
    pub fn new(table: PrefixTable, node: NodeContext) -> Self {
        info!("[hc-02] Shard resolver ready at {}", node.location());
        Self { table, node }
    }

    /// Resolver over the reference deployment table.
    pub fn reference(node: NodeContext) -> Self {
        Self::new(PrefixTable::reference(), node)
    }

    /// Resolver over a table built from configuration.
    pub fn from_config(config: &ShardingConfig, node: NodeContext) -> Result<Self, ShardError> {
        Ok(Self::new(PrefixTable::from_config(config)?, node))
    }

    /// The partition table.
    pub fn table(&self) -> &PrefixTable {
        &self.table
    }

    /// The node context.
    pub fn node(&self) -> &NodeContext {
        &self.node
    }

    /// Probe order used by [`ShardResolver::resolve`].
    pub fn search_order(&self) -> Vec<Location> {
        algorithms::search_order(&self.node.location())
    }
}

impl ShardingApi for ShardResolver {
    fn resolve(&self, address: &Address) -> Option<Location> {
        algorithms::resolve_location(&self.table, address, &self.node.location())
    }

    fn is_in_chain_scope(&self, address: &Address) -> bool {
        algorithms::is_in_chain_scope(&self.table, address, &self.node.location())
    }

    fn is_cross_shard(&self, from: &Address, to: &Address) -> bool {
        algorithms::is_cross_shard(&self.table, from, to, &self.node.location())
    }

    fn node_location(&self) -> Location {
        self.node.location()
    }
}
