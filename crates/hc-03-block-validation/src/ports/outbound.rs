//! Driven ports (Outbound dependencies)
//!
//! Everything the validator needs from the rest of the node: block and state
//! availability, header lookups, the consensus engine, root hashing, bloom
//! derivation, ETX history and the post-execution state.

use crate::domain::{Block, Bloom, EngineError, Header, HistoryError, Receipt, StoreError, Transaction};
use shared_types::Hash;

/// Which blocks (and their state) the node holds.
pub trait BlockAvailability: Send + Sync {
    /// Whether both the block and its post-state are present.
    fn has_block_and_state(&self, hash: &Hash, number: u64) -> bool;

    /// Whether the block is known at all, with or without state.
    fn has_block(&self, hash: &Hash, number: u64) -> bool;
}

/// Read access to stored headers.
pub trait HeaderReader: Send + Sync {
    /// Header with the given hash and number.
    fn get_header(&self, hash: &Hash, number: u64) -> Option<Header>;
}

/// Consensus engine rules the validator delegates to.
pub trait Engine: Send + Sync {
    /// Check the block's uncle set against the chain.
    fn verify_uncles(&self, chain: &dyn HeaderReader, block: &Block) -> Result<(), EngineError>;
}

/// Order-sensitive root over a list of encoded items.
///
/// The empty list must hash to [`EMPTY_ROOT_HASH`](shared_types::EMPTY_ROOT_HASH)
/// and no non-empty list may.
pub trait RootHasher: Send + Sync {
    /// Root of `leaves`, each an RLP-encoded item.
    fn merkle_root(&self, leaves: &[Vec<u8>]) -> Hash;
}

/// History of external transactions.
pub trait EtxRollupProvider: Send + Sync {
    /// ETXs emitted by every block strictly between the last coincident block
    /// and `block`, oldest first.
    fn collect_etx_rollup(&self, block: &Block) -> Result<Vec<Transaction>, HistoryError>;
}

/// Bloom derivation from receipts.
pub trait BloomCalculator: Send + Sync {
    /// Bloom of all logs in `receipts`.
    fn bloom_of(&self, receipts: &[Receipt]) -> Bloom;
}

/// State after executing a block.
pub trait PostState {
    /// Current state root. `delete_empty_objects` selects the EIP-158 ruleset.
    fn intermediate_root(&self, delete_empty_objects: bool) -> Result<Hash, StoreError>;
}

/// Everything the validator reads from the chain.
pub trait ChainReader: BlockAvailability + HeaderReader + EtxRollupProvider {}

impl<T> ChainReader for T where T: BlockAvailability + HeaderReader + EtxRollupProvider {}
