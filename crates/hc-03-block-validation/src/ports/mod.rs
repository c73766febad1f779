//! Ports for the Block Validation subsystem

pub mod outbound;

pub use outbound::*;
