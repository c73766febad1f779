//! Chain configuration
//!
//! Immutable after construction. The node location lives here and is passed
//! to the validator explicitly.

use super::error::ConfigError;
use hc_01_location::{Location, NodeContext, Tier};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Default divisor bounding per-block gas limit movement.
pub const GAS_LIMIT_BOUND_DIVISOR: u64 = 1024;

/// Default floor for the gas limit.
pub const MIN_GAS_LIMIT: u64 = 5000;

/// Gas limit policy constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasLimitParams {
    /// Gas limit may move by at most `parent / bound_divisor - 1` per block.
    pub bound_divisor: u64,
    /// The gas limit never targets below this.
    pub min_gas_limit: u64,
}

impl Default for GasLimitParams {
    fn default() -> Self {
        Self {
            bound_divisor: GAS_LIMIT_BOUND_DIVISOR,
            min_gas_limit: MIN_GAS_LIMIT,
        }
    }
}

/// Chain configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub chain_id: u64,
    /// Location of this node's chain.
    pub location: Location,
    /// First block of the EIP-158 ruleset (empty accounts deleted). `None` = never.
    pub eip158_block: Option<u64>,
    pub gas_limit: GasLimitParams,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: 1,
            location: Location::top(),
            eip158_block: Some(0),
            gas_limit: GasLimitParams::default(),
        }
    }
}

impl ChainConfig {
    /// Config for a node at `location`, defaults elsewhere.
    pub fn for_location(location: Location) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    /// Whether the EIP-158 ruleset is active at block `number`.
    pub fn is_eip158(&self, number: u64) -> bool {
        self.eip158_block.is_some_and(|fork| number >= fork)
    }

    /// Tier of this node's chain.
    pub fn tier(&self) -> Tier {
        self.location.tier()
    }

    /// Reject settings the validator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gas_limit.bound_divisor == 0 {
            return Err(ConfigError::InvalidValue {
                key: "gas_limit.bound_divisor".into(),
                value: "0".into(),
            });
        }
        Ok(())
    }

    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables.
    ///
    /// - `HC_NODE_LOCATION`: node location (default: prime)
    /// - `HC_CHAIN_ID`: chain id (default: 1)
    /// - `HC_EIP158_BLOCK`: fork block, or `none` (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::for_location(NodeContext::from_env()?.location());

        if let Ok(raw) = env::var("HC_CHAIN_ID") {
            config.chain_id = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HC_CHAIN_ID".into(),
                value: raw.clone(),
            })?;
        }

        if let Ok(raw) = env::var("HC_EIP158_BLOCK") {
            config.eip158_block = if raw.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(raw.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "HC_EIP158_BLOCK".into(),
                    value: raw.clone(),
                })?)
            };
        }

        config.validate()?;
        info!(
            "[hc-03] Chain config: chain_id={} location={} eip158={:?}",
            config.chain_id, config.location, config.eip158_block
        );
        Ok(config)
    }
}
