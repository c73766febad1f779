//! # Prefix Table
//!
//! Immutable map from every location in the hierarchy to the first-byte
//! range of addresses it owns. Built once, validated at construction, then
//! shared read-only.

use super::errors::ShardError;
use super::invariants::{invariant_complete_cover, invariant_disjoint_ranges};
use super::value_objects::{PrefixRange, ShardingConfig, REFERENCE_RANGES};
use hc_01_location::{Location, NUM_REGIONS, NUM_ZONES_PER_REGION};
use shared_types::Address;
use tracing::debug;

/// Number of chains in the hierarchy.
pub const NUM_LOCATIONS: usize = 1 + (NUM_REGIONS as usize) * (1 + NUM_ZONES_PER_REGION as usize);

// Position of a location in `Location::all()` order.
fn slot(location: &Location) -> usize {
    let per_region = 1 + NUM_ZONES_PER_REGION as usize;
    match (location.mid_index(), location.leaf_index()) {
        (None, _) => 0,
        (Some(r), None) => 1 + r as usize * per_region,
        (Some(r), Some(z)) => 2 + r as usize * per_region + z as usize,
    }
}

/// Validated address partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixTable {
    ranges: [PrefixRange; NUM_LOCATIONS],
}

impl PrefixTable {
    /// Build a table from `(location, range)` pairs.
    ///
    /// Fails unless every location is registered exactly once and the ranges
    /// are pairwise disjoint.
    pub fn new<I>(entries: I) -> Result<Self, ShardError>
    where
        I: IntoIterator<Item = (Location, PrefixRange)>,
    {
        let mut slots: [Option<PrefixRange>; NUM_LOCATIONS] = [None; NUM_LOCATIONS];
        for (location, range) in entries {
            let range = PrefixRange::new(&location.name(), range.lo(), range.hi())?;
            let entry = &mut slots[slot(&location)];
            if entry.is_some() {
                return Err(ShardError::DuplicateLocation(location.name()));
            }
            *entry = Some(range);
        }

        let mut ranges = [PrefixRange::from_bounds(0, 0); NUM_LOCATIONS];
        invariant_complete_cover(&slots)?;
        for (i, range) in slots.iter().enumerate() {
            if let Some(range) = range {
                ranges[i] = *range;
            }
        }
        invariant_disjoint_ranges(&ranges)?;

        debug!("[hc-02] Prefix table built for {} locations", NUM_LOCATIONS);
        Ok(Self { ranges })
    }

    /// The reference deployment table.
    pub fn reference() -> Self {
        let mut ranges = [PrefixRange::from_bounds(0, 0); NUM_LOCATIONS];
        for (location, range) in Location::all().iter().zip(ranges.iter_mut()) {
            if let Some(&(_, lo, hi)) = REFERENCE_RANGES
                .iter()
                .find(|(name, _, _)| *name == location.name())
            {
                *range = PrefixRange::from_bounds(lo, hi);
            }
        }
        Self { ranges }
    }

    /// Build a table from named configuration.
    pub fn from_config(config: &ShardingConfig) -> Result<Self, ShardError> {
        let entries = config
            .ranges
            .iter()
            .map(|(name, range)| Ok((Location::from_name(name)?, *range)))
            .collect::<Result<Vec<_>, ShardError>>()?;
        Self::new(entries)
    }

    /// Range owned by `location`.
    pub fn range_of(&self, location: &Location) -> PrefixRange {
        self.ranges[slot(location)]
    }

    /// Whether `address` falls in `location`'s partition.
    pub fn contains_address(&self, location: &Location, address: &Address) -> bool {
        self.range_of(location).contains(address.prefix())
    }

    /// The location owning first byte `prefix`, if any.
    pub fn owner_of_prefix(&self, prefix: u8) -> Option<Location> {
        Location::all()
            .into_iter()
            .find(|location| self.range_of(location).contains(prefix))
    }

    /// `(location, range)` pairs in hierarchy order.
    pub fn iter(&self) -> impl Iterator<Item = (Location, PrefixRange)> + '_ {
        Location::all().into_iter().map(move |l| (l, self.range_of(&l)))
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::reference()
    }
}
