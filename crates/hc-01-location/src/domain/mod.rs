//! # Domain Module
//!
//! Coordinates, tiers and naming of chains in the hierarchy.

pub mod errors;
pub mod location;

pub use errors::*;
pub use location::*;
