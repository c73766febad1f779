//! # Domain Errors
//!
//! Error types for the Location subsystem. All of them are configuration
//! errors: they surface while building a [`Location`](super::Location) and
//! never from navigating an existing one.

use thiserror::Error;

/// Location construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// More coordinates than the hierarchy has tiers below Prime.
    #[error("Too many coordinates: {len} given, at most {max} allowed")]
    TooManyCoordinates {
        /// Coordinates supplied
        len: usize,
        /// Maximum path length
        max: usize,
    },

    /// Region coordinate is not below the branching factor.
    #[error("Region index {index} is not valid (must be < {max})")]
    RegionOutOfRange {
        /// Supplied region index
        index: u8,
        /// Number of regions
        max: u8,
    },

    /// Zone coordinate is not below the branching factor.
    #[error("Zone index {index} is not valid (must be < {max})")]
    ZoneOutOfRange {
        /// Supplied zone index
        index: u8,
        /// Number of zones per region
        max: u8,
    },

    /// Name does not match any chain in the hierarchy.
    #[error("Unknown location name: {0}")]
    UnknownName(String),

    /// Text could not be parsed as a name or a coordinate list.
    #[error("Malformed location: {0}")]
    Malformed(String),
}
