//! # Location
//!
//! A chain's position in the hierarchy, encoded as the path of coordinates
//! from Prime down to the chain:
//!
//! ```text
//! prime        = []
//! region[0]    = [0]
//! zone[1, 2]   = [1, 2]
//! ```
//!
//! Dominant / subordinate / sibling relations reduce to prefix arithmetic on
//! that path. Every `Location` value is validated when it is built, so tier
//! and name lookups are total.

use super::errors::LocationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Number of regions beneath Prime.
pub const NUM_REGIONS: u8 = 3;

/// Number of zones beneath each region.
pub const NUM_ZONES_PER_REGION: u8 = 3;

/// Number of tiers in the hierarchy (Prime, Region, Zone).
pub const HIERARCHY_DEPTH: usize = 3;

/// Longest coordinate path (a zone).
pub const MAX_COORDINATES: usize = HIERARCHY_DEPTH - 1;

/// Name of the top-tier chain.
pub const PRIME_NAME: &str = "prime";

/// Region names, indexed by region coordinate.
pub const REGION_NAMES: [&str; NUM_REGIONS as usize] = ["cyprus", "paxos", "hydra"];

/// Tier of a chain in the hierarchy, root to leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// The single Prime chain.
    Top,
    /// A Region chain.
    Mid,
    /// A Zone chain.
    Leaf,
}

impl Tier {
    /// All tiers, root first.
    pub const ALL: [Tier; HIERARCHY_DEPTH] = [Tier::Top, Tier::Mid, Tier::Leaf];

    /// Index of the tier (0 = Top), used to address per-tier header slots.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tier at the given index.
    pub fn from_index(index: usize) -> Option<Tier> {
        Self::ALL.get(index).copied()
    }

    /// The tier directly beneath this one.
    pub fn subordinate(self) -> Option<Tier> {
        Self::from_index(self.index() + 1)
    }

    /// The tier directly above this one.
    pub fn dominant(self) -> Option<Tier> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Whether chains of this tier have subordinate chains.
    pub fn has_subordinate(self) -> bool {
        self.subordinate().is_some()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Top => "prime",
            Tier::Mid => "region",
            Tier::Leaf => "zone",
        };
        f.write_str(s)
    }
}

/// Location of a chain within the hierarchy.
///
/// Unused coordinate slots are always zero, so derived equality and hashing
/// are exact path comparisons.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    coords: [u8; MAX_COORDINATES],
    depth: u8,
}

impl Location {
    /// The Prime location (empty path).
    pub const fn top() -> Self {
        Self {
            coords: [0; MAX_COORDINATES],
            depth: 0,
        }
    }

    /// Build a location from a coordinate path.
    pub fn new(path: &[u8]) -> Result<Self, LocationError> {
        if path.len() > MAX_COORDINATES {
            return Err(LocationError::TooManyCoordinates {
                len: path.len(),
                max: MAX_COORDINATES,
            });
        }
        if let Some(&region) = path.first() {
            if region >= NUM_REGIONS {
                return Err(LocationError::RegionOutOfRange {
                    index: region,
                    max: NUM_REGIONS,
                });
            }
        }
        if let Some(&zone) = path.get(1) {
            if zone >= NUM_ZONES_PER_REGION {
                return Err(LocationError::ZoneOutOfRange {
                    index: zone,
                    max: NUM_ZONES_PER_REGION,
                });
            }
        }
        let mut coords = [0u8; MAX_COORDINATES];
        coords[..path.len()].copy_from_slice(path);
        Ok(Self {
            coords,
            depth: path.len() as u8,
        })
    }

    /// A region location.
    pub fn region(region: u8) -> Result<Self, LocationError> {
        Self::new(&[region])
    }

    /// A zone location.
    pub fn zone(region: u8, zone: u8) -> Result<Self, LocationError> {
        Self::new(&[region, zone])
    }

    /// Every valid location: Prime, then each region followed by its zones.
    pub fn all() -> Vec<Location> {
        let mut out = vec![Self::top()];
        for r in 0..NUM_REGIONS {
            let region = Self::from_valid(&[r]);
            out.push(region);
            for z in 0..NUM_ZONES_PER_REGION {
                out.push(Self::from_valid(&[r, z]));
            }
        }
        out
    }

    // Only for paths already known to be in range.
    fn from_valid(path: &[u8]) -> Self {
        let mut coords = [0u8; MAX_COORDINATES];
        coords[..path.len()].copy_from_slice(path);
        Self {
            coords,
            depth: path.len() as u8,
        }
    }

    /// The coordinate path.
    pub fn as_slice(&self) -> &[u8] {
        &self.coords[..self.depth as usize]
    }

    /// Number of coordinates (0 for Prime).
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    /// Whether this is the Prime location.
    pub fn is_top(&self) -> bool {
        self.depth == 0
    }

    /// Region coordinate, if present.
    pub fn mid_index(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }

    /// Zone coordinate, if present.
    pub fn leaf_index(&self) -> Option<u8> {
        self.as_slice().get(1).copied()
    }

    /// Tier of this location.
    pub fn tier(&self) -> Tier {
        match self.depth {
            0 => Tier::Top,
            1 => Tier::Mid,
            _ => Tier::Leaf,
        }
    }

    fn truncated(&self, depth: usize) -> Self {
        Self::from_valid(&self.as_slice()[..depth.min(self.depth())])
    }

    /// Location of the dominant chain (last coordinate dropped; Prime stays Prime).
    pub fn dominant(&self) -> Location {
        self.truncated(self.depth().saturating_sub(1))
    }

    /// The coordinate of `self` that names `node`'s immediate subordinate.
    ///
    /// Prime's subordinates are regions, so a Prime node reads the region
    /// coordinate; a Region node reads the zone coordinate; a Zone node has no
    /// subordinate.
    pub fn subordinate_index(&self, node: &Location) -> Option<u8> {
        match node.tier() {
            Tier::Top => self.mid_index(),
            Tier::Mid => self.leaf_index(),
            Tier::Leaf => None,
        }
    }

    /// `self` extended by the one coordinate of `slice` at position `depth()`.
    ///
    /// * Prime with slice `[0, 0]` yields `[0]` (region-0 is Prime's
    ///   subordinate in that slice).
    /// * Region-0 with slice `[0, 0]` yields `[0, 0]`.
    ///
    /// Returns `None` unless `slice` strictly extends `self`.
    pub fn subordinate_in_slice(&self, slice: &Location) -> Option<Location> {
        if slice.depth <= self.depth || !slice.as_slice().starts_with(self.as_slice()) {
            debug!(
                "[hc-01] {} has no subordinate in slice {}: slice is not deeper within the same branch",
                self, slice
            );
            return None;
        }
        Some(slice.truncated(self.depth() + 1))
    }

    /// Whether one location's path is a prefix of the other's.
    pub fn same_slice_as(&self, other: &Location) -> bool {
        let n = self.depth().min(other.depth());
        self.as_slice()[..n] == other.as_slice()[..n]
    }

    /// Whether `other` lies strictly beneath `self` in the same branch.
    pub fn is_dominant_of(&self, other: &Location) -> bool {
        other.depth > self.depth && self.same_slice_as(other)
    }

    /// Highest-context chain common to both locations (longest common prefix).
    ///
    /// * zone-0-0 and zone-0-1 share region-0.
    /// * zone-0-0 and zone-1-0 share Prime.
    pub fn common_dominant(&self, other: &Location) -> Location {
        let common = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .take_while(|(a, b)| a == b)
            .count();
        self.truncated(common)
    }

    /// Human-readable chain name: `prime`, `cyprus`, `paxos2`, ...
    pub fn name(&self) -> String {
        match (self.mid_index(), self.leaf_index()) {
            (None, _) => PRIME_NAME.to_string(),
            (Some(r), None) => REGION_NAMES[r as usize].to_string(),
            (Some(r), Some(z)) => format!("{}{}", REGION_NAMES[r as usize], z + 1),
        }
    }

    /// Inverse of [`Location::name`].
    pub fn from_name(name: &str) -> Result<Self, LocationError> {
        Self::all()
            .into_iter()
            .find(|loc| loc.name() == name)
            .ok_or_else(|| LocationError::UnknownName(name.to_string()))
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}{:?})", self.name(), self.as_slice())
    }
}

/// Accepts a chain name (`"paxos2"`) or a comma-separated coordinate list
/// (`"1,1"`, `"[1, 1]"`; empty for Prime).
impl FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(loc) = Self::from_name(trimmed) {
            return Ok(loc);
        }
        let inner = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(trimmed)
            .trim();
        if inner.is_empty() {
            return Ok(Self::top());
        }
        let path = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| LocationError::Malformed(s.to_string()))?;
        Self::new(&path)
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let path = Vec::<u8>::deserialize(deserializer)?;
        Self::new(&path).map_err(serde::de::Error::custom)
    }
}
