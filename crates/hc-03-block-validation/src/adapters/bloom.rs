//! Receipt bloom adapter

use crate::domain::{Bloom, Receipt};
use crate::ports::BloomCalculator;

/// Reference [`BloomCalculator`]: the union of every receipt's log bloom.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogsBloom;

impl BloomCalculator for LogsBloom {
    fn bloom_of(&self, receipts: &[Receipt]) -> Bloom {
        receipts.iter().fold(Bloom::default(), |mut acc, receipt| {
            acc.accrue_bloom(&receipt.bloom());
            acc
        })
    }
}
