//! # Domain Invariants
//!
//! Rules a prefix table must satisfy before it is used for lookups.

use super::entities::NUM_LOCATIONS;
use super::errors::ShardError;
use super::value_objects::PrefixRange;
use hc_01_location::Location;

/// Invariant: every location in the hierarchy has a range.
///
/// `slots` is indexed in [`Location::all`] order.
pub fn invariant_complete_cover(
    slots: &[Option<PrefixRange>; NUM_LOCATIONS],
) -> Result<(), ShardError> {
    for (location, slot) in Location::all().iter().zip(slots.iter()) {
        if slot.is_none() {
            return Err(ShardError::MissingLocation(location.name()));
        }
    }
    Ok(())
}

/// Invariant: no first byte belongs to two locations.
///
/// `ranges` is indexed in [`Location::all`] order.
pub fn invariant_disjoint_ranges(ranges: &[PrefixRange; NUM_LOCATIONS]) -> Result<(), ShardError> {
    let locations = Location::all();
    for i in 0..NUM_LOCATIONS {
        for j in (i + 1)..NUM_LOCATIONS {
            if ranges[i].overlaps(&ranges[j]) {
                return Err(ShardError::Overlap {
                    first: locations[i].name(),
                    second: locations[j].name(),
                });
            }
        }
    }
    Ok(())
}
