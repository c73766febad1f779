//! Uncle rules engine
//!
//! Reference [`Engine`]: bounded uncle count, no duplicates, no ancestors,
//! every uncle strictly older than the block and attached to a known parent.

use crate::domain::{Block, EngineError};
use crate::ports::{Engine, HeaderReader};
use shared_types::Hash;
use std::collections::HashSet;
use tracing::debug;

/// Default maximum uncles per block.
pub const MAX_UNCLES: usize = 2;

/// How many generations back an uncle may not be an ancestor.
pub const UNCLE_ANCESTRY_DEPTH: u64 = 7;

/// Reference uncle verifier.
#[derive(Clone, Copy, Debug)]
pub struct UncleRulesEngine {
    max_uncles: usize,
}

impl Default for UncleRulesEngine {
    fn default() -> Self {
        Self {
            max_uncles: MAX_UNCLES,
        }
    }
}

impl UncleRulesEngine {
    /// Engine allowing at most `max_uncles` per block.
    pub fn new(max_uncles: usize) -> Self {
        Self { max_uncles }
    }

    fn ancestors(chain: &dyn HeaderReader, block: &Block) -> HashSet<Hash> {
        let mut ancestors = HashSet::new();
        let mut hash = block.parent_hash();
        let mut number = block.number();
        for _ in 0..UNCLE_ANCESTRY_DEPTH {
            let Some(parent_number) = number.checked_sub(1) else {
                break;
            };
            let Some(header) = chain.get_header(&hash, parent_number) else {
                break;
            };
            ancestors.insert(hash);
            hash = header.parent_hash;
            number = parent_number;
        }
        ancestors
    }
}

impl Engine for UncleRulesEngine {
    fn verify_uncles(&self, chain: &dyn HeaderReader, block: &Block) -> Result<(), EngineError> {
        let uncles = block.uncles();
        if uncles.is_empty() {
            return Ok(());
        }
        if uncles.len() > self.max_uncles {
            return Err(EngineError::TooManyUncles {
                count: uncles.len(),
                max: self.max_uncles,
            });
        }

        let ancestors = Self::ancestors(chain, block);
        let mut seen = HashSet::new();
        for uncle in uncles {
            let hash = uncle.hash();
            if !seen.insert(hash) {
                return Err(EngineError::DuplicateUncle(hash));
            }
            if ancestors.contains(&hash) {
                return Err(EngineError::UncleIsAncestor(hash));
            }
            if uncle.number >= block.number() {
                return Err(EngineError::InvalidUncle(format!(
                    "uncle {} at height {} is not older than block at {}",
                    hash.terminal_string(),
                    uncle.number,
                    block.number()
                )));
            }
            let known_parent = uncle
                .number
                .checked_sub(1)
                .and_then(|n| chain.get_header(&uncle.parent_hash, n))
                .is_some();
            if !known_parent {
                return Err(EngineError::DanglingUncle(hash));
            }
        }

        debug!(
            "[hc-03] Uncles verified for block {}: {}",
            block.hash().terminal_string(),
            uncles.len()
        );
        Ok(())
    }
}
