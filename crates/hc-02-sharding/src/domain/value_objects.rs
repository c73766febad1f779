//! # Domain Value Objects
//!
//! Prefix ranges and the configuration that names them.

use super::errors::ShardError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive range of address first bytes owned by one chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixRange {
    lo: u8,
    hi: u8,
}

impl PrefixRange {
    /// Create a range, rejecting `lo > hi`. `name` is only used in the error.
    pub fn new(name: &str, lo: u8, hi: u8) -> Result<Self, ShardError> {
        if lo > hi {
            return Err(ShardError::MalformedRange {
                name: name.to_string(),
                lo,
                hi,
            });
        }
        Ok(Self { lo, hi })
    }

    // Bounds already known to be ordered.
    pub(crate) const fn from_bounds(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    /// Lower bound (inclusive).
    pub fn lo(&self) -> u8 {
        self.lo
    }

    /// Upper bound (inclusive).
    pub fn hi(&self) -> u8 {
        self.hi
    }

    /// Whether `byte` falls within the range.
    pub fn contains(&self, byte: u8) -> bool {
        self.lo <= byte && byte <= self.hi
    }

    /// Whether two ranges share at least one byte.
    pub fn overlaps(&self, other: &PrefixRange) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

/// Named prefix ranges of the reference deployment. First bytes 130-255 are
/// reserved and owned by no chain.
pub const REFERENCE_RANGES: [(&str, u8, u8); 13] = [
    ("prime", 0, 9),
    ("cyprus", 10, 19),
    ("cyprus1", 20, 29),
    ("cyprus2", 30, 39),
    ("cyprus3", 40, 49),
    ("paxos", 50, 59),
    ("paxos1", 60, 69),
    ("paxos2", 70, 79),
    ("paxos3", 80, 89),
    ("hydra", 90, 99),
    ("hydra1", 100, 109),
    ("hydra2", 110, 119),
    ("hydra3", 120, 129),
];

/// Address partition configuration, keyed by location name.
///
/// ```json
/// { "ranges": { "prime": { "lo": 0, "hi": 9 }, "cyprus": { "lo": 10, "hi": 19 } } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShardingConfig {
    /// Location name to inclusive first-byte range.
    pub ranges: BTreeMap<String, PrefixRange>,
}

impl Default for ShardingConfig {
    fn default() -> Self {
        let ranges = REFERENCE_RANGES
            .iter()
            .map(|&(name, lo, hi)| (name.to_string(), PrefixRange::from_bounds(lo, hi)))
            .collect();
        Self { ranges }
    }
}

impl ShardingConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ShardError> {
        serde_json::from_str(json).map_err(|e| ShardError::ConfigError(e.to_string()))
    }
}
