//! # Ports
//!
//! Hexagonal architecture ports for the Sharding subsystem.

pub mod inbound;

pub use inbound::ShardingApi;
