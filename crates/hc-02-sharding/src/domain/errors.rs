//! # Domain Errors
//!
//! Error types for the Sharding subsystem. All of them are raised while
//! building a [`PrefixTable`](super::PrefixTable); lookups on a built table
//! cannot fail.

use hc_01_location::LocationError;
use thiserror::Error;

/// Sharding configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShardError {
    /// Range with `lo > hi`.
    #[error("Malformed range for {name}: {lo} > {hi}")]
    MalformedRange {
        /// Location name
        name: String,
        /// Lower bound
        lo: u8,
        /// Upper bound
        hi: u8,
    },

    /// Two locations claim the same first byte.
    #[error("Overlapping prefix ranges: {first} and {second}")]
    Overlap {
        /// First location name
        first: String,
        /// Second location name
        second: String,
    },

    /// A location was registered more than once.
    #[error("Duplicate prefix range for {0}")]
    DuplicateLocation(String),

    /// A valid location has no range.
    #[error("No prefix range for {0}")]
    MissingLocation(String),

    /// Range names a location that does not exist.
    #[error("Invalid location: {0}")]
    Location(#[from] LocationError),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
