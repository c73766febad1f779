//! # Node Context
//!
//! The location this node runs at. Read once at startup and passed to every
//! subsystem that needs it; nothing reads it from a global.

use crate::domain::{Location, LocationError, Tier};
use std::env;
use tracing::info;

/// Environment variable holding the node location (name or coordinates).
pub const NODE_LOCATION_ENV: &str = "HC_NODE_LOCATION";

/// Location and tier of the running node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct NodeContext {
    location: Location,
}

impl NodeContext {
    /// Create a context for the given location.
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    /// Read the node location from `HC_NODE_LOCATION`.
    ///
    /// Unset means Prime. A set but unparsable value is an error.
    pub fn from_env() -> Result<Self, LocationError> {
        let location = match env::var(NODE_LOCATION_ENV) {
            Ok(raw) => raw.parse::<Location>()?,
            Err(_) => Location::top(),
        };
        info!(
            "[hc-01] Node context: {} (tier {})",
            location,
            location.tier()
        );
        Ok(Self::new(location))
    }

    /// Node location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Node tier.
    pub fn tier(&self) -> Tier {
        self.location.tier()
    }

    /// Whether this node's chain has subordinate chains.
    pub fn has_subordinate(&self) -> bool {
        self.tier().has_subordinate()
    }

    /// Tier of this node's subordinate chains.
    pub fn subordinate_tier(&self) -> Option<Tier> {
        self.tier().subordinate()
    }

    /// Whether `other` lies strictly beneath this node in the same branch.
    pub fn is_dominant_of(&self, other: &Location) -> bool {
        self.location.is_dominant_of(other)
    }

    /// Whether this node is the given location.
    pub fn is(&self, other: &Location) -> bool {
        self.location == *other
    }
}

impl From<Location> for NodeContext {
    fn from(location: Location) -> Self {
        Self::new(location)
    }
}
