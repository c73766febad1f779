//! # HC-01 Location
//!
//! Coordinates of chains in the three-tier hierarchy.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD)  
//! **Status:** Production-Ready
//!
//! ## Purpose
//!
//! Every chain in the hierarchy has a location:
//!
//! ```text
//!                      prime []
//!          ┌─────────────┼─────────────┐
//!     cyprus [0]     paxos [1]     hydra [2]
//!      ┌──┼──┐        ┌──┼──┐       ┌──┼──┐
//!    [0,0]..[0,2]   [1,0]..[1,2]   [2,0]..[2,2]
//! ```
//!
//! This crate defines the [`Location`] value, its [`Tier`], and the
//! relations between locations (dominant, subordinate, same slice, common
//! dominant). It also carries the [`NodeContext`] that tells the other
//! subsystems where the running node sits.
//!
//! ## Module Structure
//!
//! ```text
//! hc-01-location/
//! ├── domain/      # Location, Tier, LocationError, hierarchy constants
//! └── context.rs   # NodeContext (node location, read from HC_NODE_LOCATION)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod domain;

// Re-exports
pub use context::{NodeContext, NODE_LOCATION_ENV};
pub use domain::{
    Location, LocationError, Tier, HIERARCHY_DEPTH, MAX_COORDINATES, NUM_REGIONS,
    NUM_ZONES_PER_REGION, PRIME_NAME, REGION_NAMES,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
