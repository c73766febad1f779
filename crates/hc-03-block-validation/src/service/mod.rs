//! Block Validator - Core business logic
//!
//! # Architecture
//! - Stateless: immutable config plus shared collaborators
//! - Structural checks before execution, state checks after
//! - Every failure carries an [`ErrorClass`](crate::domain::ErrorClass)

use crate::adapters::{KeccakRootHasher, LogsBloom};
use crate::domain::{
    calc_uncle_hash, emitted_etxs, Block, BodyError, BodyResult, ChainConfig, Receipt,
    StateError, StateResult,
};
use crate::metrics;
use crate::ports::{BloomCalculator, ChainReader, Engine, PostState, RootHasher};
use rlp::Encodable;
use shared_types::{Hash, EMPTY_ROOT_HASH};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};


/// Validates block bodies and post-execution state against headers.
///
/// Safe to share across threads; holds no mutable state.
pub struct BlockValidator<C, E>
where
    C: ChainReader,
    E: Engine,
{
    config: ChainConfig,
    chain: Arc<C>,
    engine: Arc<E>,
    root_hasher: Box<dyn RootHasher>,
    bloom: Box<dyn BloomCalculator>,
}

impl<C, E> BlockValidator<C, E>
where
    C: ChainReader,
    E: Engine,
{
    /// Create a validator with the reference root hasher and bloom.
    pub fn new(config: ChainConfig, chain: Arc<C>, engine: Arc<E>) -> Self {
        Self {
            config,
            chain,
            engine,
            root_hasher: Box::new(KeccakRootHasher),
            bloom: Box::new(LogsBloom),
        }
    }

    /// Set custom root hasher
    pub fn with_root_hasher(mut self, root_hasher: Box<dyn RootHasher>) -> Self {
        self.root_hasher = root_hasher;
        self
    }

    /// Set custom bloom calculator
    pub fn with_bloom(mut self, bloom: Box<dyn BloomCalculator>) -> Self {
        self.bloom = bloom;
        self
    }

    /// Chain configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Root of an ordered list of RLP-encodable items.
    pub fn derive_root<T: Encodable>(&self, items: &[T]) -> Hash {
        let leaves: Vec<Vec<u8>> = items.iter().map(|item| rlp::encode(item).to_vec()).collect();
        self.root_hasher.merkle_root(&leaves)
    }

    // === STRUCTURAL VALIDATION ===

    /// Validate a block's uncles, body roots, subordinate manifest and
    /// parent linkage. The header itself is assumed already verified.
    pub fn validate_body(&self, block: &Block) -> BodyResult<()> {
        let start = Instant::now();
        let result = self.check_body(block);
        metrics::record_validation_latency(start.elapsed().as_secs_f64());

        match &result {
            Ok(()) => {
                metrics::record_body_validated();
                debug!(
                    "[hc-03] Body valid: block {} at height {}",
                    block.hash().terminal_string(),
                    block.number()
                );
            }
            Err(err) => {
                metrics::record_block_rejected("body", err.reason());
                if err.class().rejects_block() {
                    warn!(
                        "[hc-03] Body rejected: block {} at height {}: {}",
                        block.hash().terminal_string(),
                        block.number(),
                        err
                    );
                } else {
                    debug!(
                        "[hc-03] Body deferred: block {} at height {}: {}",
                        block.hash().terminal_string(),
                        block.number(),
                        err
                    );
                }
            }
        }
        result
    }

    fn check_body(&self, block: &Block) -> BodyResult<()> {
        let header = block.header();

        if self.chain.has_block_and_state(&block.hash(), block.number()) {
            return Err(BodyError::AlreadyKnown {
                hash: block.hash(),
                number: block.number(),
            });
        }

        self.engine.verify_uncles(&*self.chain, block)?;

        let local = calc_uncle_hash(block.uncles());
        if local != header.uncle_hash {
            return Err(BodyError::UncleRootMismatch {
                remote: header.uncle_hash,
                local,
            });
        }

        let local = self.derive_root(block.transactions());
        if local != header.tx_hash {
            return Err(BodyError::TxRootMismatch {
                remote: header.tx_hash,
                local,
            });
        }

        let local = self.derive_root(block.ext_transactions());
        if local != header.etx_hash {
            return Err(BodyError::EtxRootMismatch {
                remote: header.etx_hash,
                local,
            });
        }

        // A chain with subordinates always has a non-empty manifest
        if let Some(sub_tier) = self.config.tier().subordinate() {
            let local = self.derive_root(block.sub_manifest());
            let remote = header.manifest_hash(sub_tier);
            if local == EMPTY_ROOT_HASH || local != remote {
                return Err(BodyError::BadSubManifest { remote, local });
            }
        }

        self.check_parent(block)
    }

    fn check_parent(&self, block: &Block) -> BodyResult<()> {
        let parent = block.parent_hash();
        let Some(number) = block.number().checked_sub(1) else {
            return Err(BodyError::UnknownAncestor {
                hash: parent,
                number: 0,
            });
        };
        if self.chain.has_block_and_state(&parent, number) {
            return Ok(());
        }
        if !self.chain.has_block(&parent, number) {
            return Err(BodyError::UnknownAncestor {
                hash: parent,
                number,
            });
        }
        Err(BodyError::PrunedAncestor {
            hash: parent,
            number,
        })
    }

    // === POST-EXECUTION VALIDATION ===

    /// Validate the results of executing `block`: gas, bloom, receipts, state
    /// root, emitted ETXs and the ETX rollup.
    pub fn validate_state(
        &self,
        block: &Block,
        post_state: &dyn PostState,
        receipts: &[Receipt],
        gas_used: u64,
    ) -> StateResult<()> {
        let start = Instant::now();
        let result = self.check_state(block, post_state, receipts, gas_used);
        metrics::record_validation_latency(start.elapsed().as_secs_f64());

        match &result {
            Ok(()) => {
                metrics::record_state_validated();
                debug!(
                    "[hc-03] State valid: block {} at height {}, {} receipts",
                    block.hash().terminal_string(),
                    block.number(),
                    receipts.len()
                );
            }
            Err(err) => {
                metrics::record_block_rejected("state", err.reason());
                warn!(
                    "[hc-03] State rejected: block {} at height {}: {}",
                    block.hash().terminal_string(),
                    block.number(),
                    err
                );
            }
        }
        result
    }

    fn check_state(
        &self,
        block: &Block,
        post_state: &dyn PostState,
        receipts: &[Receipt],
        gas_used: u64,
    ) -> StateResult<()> {
        let header = block.header();

        if header.gas_used != gas_used {
            return Err(StateError::GasMismatch {
                remote: header.gas_used,
                local: gas_used,
            });
        }

        let local = self.bloom.bloom_of(receipts);
        if local != header.bloom {
            return Err(StateError::BloomMismatch {
                remote: Box::new(header.bloom),
                local: Box::new(local),
            });
        }

        let local = self.derive_root(receipts);
        if local != header.receipt_hash {
            return Err(StateError::ReceiptRootMismatch {
                remote: header.receipt_hash,
                local,
            });
        }

        let local = post_state
            .intermediate_root(self.config.is_eip158(header.number))
            .map_err(StateError::StateRootComputation)?;
        if local != header.root {
            return Err(StateError::StateRootMismatch {
                remote: header.root,
                local,
            });
        }

        // Body ETXs were checked against etx_hash already; execution must
        // have emitted exactly those.
        let emitted = emitted_etxs(receipts);
        let local = self.derive_root(&emitted);
        if local != header.etx_hash {
            return Err(StateError::EtxEmissionMismatch {
                remote: header.etx_hash,
                local,
            });
        }

        // History up to the parent, then this block's own emissions
        let mut rollup = self
            .chain
            .collect_etx_rollup(block)
            .map_err(StateError::RollupUnavailable)?;
        rollup.extend(emitted);
        let local = self.derive_root(&rollup);
        if local != header.etx_rollup_hash {
            return Err(StateError::RollupRootMismatch {
                remote: header.etx_rollup_hash,
                local,
            });
        }

        Ok(())
    }
}
