//! # Address Resolution
//!
//! Finds the chain that owns an address.
//!
//! The search starts in the node's own slice and fans outward:
//!
//! ```text
//! node zone1 of region R:
//!   zones of R (from zone1, wrapping) -> R -> prime
//!   zones of R+1 (wrapping)           -> R+1
//!   zones of R+2 (wrapping)           -> R+2
//! ```
//!
//! Transactions are far more likely to touch the node's own slice, and leaf
//! traffic dominates mid traffic which dominates top traffic, so the common
//! case hits within the first few probes.

use crate::domain::PrefixTable;
use hc_01_location::{Location, NUM_REGIONS, NUM_ZONES_PER_REGION};
use shared_types::Address;
use tracing::debug;

/// Order in which locations are probed when resolving an address seen by a
/// node at `node`.
///
/// Offsets wrap modulo the branching factor. Prime appears exactly once,
/// after the node's own region.
pub fn search_order(node: &Location) -> Vec<Location> {
    let r0 = node.mid_index().unwrap_or(0);
    let z0 = node.leaf_index().unwrap_or(0);

    let mut order = Vec::with_capacity(1 + (NUM_REGIONS * (1 + NUM_ZONES_PER_REGION)) as usize);
    for r in 0..NUM_REGIONS {
        let region = (r + r0) % NUM_REGIONS;
        for z in 0..NUM_ZONES_PER_REGION {
            let zone = (z + z0) % NUM_ZONES_PER_REGION;
            if let Ok(location) = Location::zone(region, zone) {
                order.push(location);
            }
        }
        if let Ok(location) = Location::region(region) {
            order.push(location);
        }
        if r == 0 {
            order.push(Location::top());
        }
    }
    order
}

/// Location of the chain owning `address`, searching from `node`'s slice.
///
/// The zero address belongs to Prime. `None` when no partition covers the
/// address's first byte.
pub fn resolve_location(table: &PrefixTable, address: &Address, node: &Location) -> Option<Location> {
    if address.is_zero() {
        return Some(Location::top());
    }
    let found = search_order(node)
        .into_iter()
        .find(|location| table.contains_address(location, address));
    if found.is_none() {
        debug!(
            "[hc-02] Address {} (prefix {}) is outside every partition",
            address,
            address.prefix()
        );
    }
    found
}

/// Whether `address` is a valid account in `node`'s own partition.
///
/// The zero address is in every chain's scope.
pub fn is_in_chain_scope(table: &PrefixTable, address: &Address, node: &Location) -> bool {
    address.is_zero() || table.contains_address(node, address)
}

/// Whether `from` and `to` live on different chains.
///
/// False if either side cannot be resolved.
pub fn is_cross_shard(table: &PrefixTable, from: &Address, to: &Address, node: &Location) -> bool {
    match (
        resolve_location(table, from, node),
        resolve_location(table, to, node),
    ) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}
