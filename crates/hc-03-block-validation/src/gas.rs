//! Gas limit adjustment
//!
//! The gas limit moves toward a desired target by a bounded step per block
//! and never overshoots it.

use crate::domain::GasLimitParams;

/// Gas limit of the block after one with `parent_limit`, stepping toward
/// `desired_limit` with the default policy.
pub fn calc_gas_limit(parent_limit: u64, desired_limit: u64) -> u64 {
    calc_gas_limit_with(&GasLimitParams::default(), parent_limit, desired_limit)
}

/// [`calc_gas_limit`] under an explicit policy.
///
/// The step is `parent / bound_divisor - 1`, saturating at zero for tiny
/// parents. Targets below the minimum are raised to it.
pub fn calc_gas_limit_with(params: &GasLimitParams, parent_limit: u64, desired_limit: u64) -> u64 {
    let delta = parent_limit
        .checked_div(params.bound_divisor)
        .unwrap_or(0)
        .saturating_sub(1);
    let desired = desired_limit.max(params.min_gas_limit);

    if parent_limit < desired {
        parent_limit.saturating_add(delta).min(desired)
    } else if parent_limit > desired {
        parent_limit.saturating_sub(delta).max(desired)
    } else {
        parent_limit
    }
}
