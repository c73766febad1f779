//! In-memory header chain
//!
//! Reference implementation of the chain-side ports: availability, header
//! lookups and ETX rollup collection. Used by tests and tooling; the
//! production store lives elsewhere.

use crate::domain::{Block, Header, HistoryError, Transaction};
use crate::ports::{BlockAvailability, EtxRollupProvider, HeaderReader};
use parking_lot::RwLock;
use shared_types::Hash;
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Default)]
struct ChainData {
    headers: HashMap<Hash, Header>,
    with_state: HashSet<Hash>,
    emitted_etxs: HashMap<Hash, Vec<Transaction>>,
    coincident: HashSet<Hash>,
}

/// Headers, state presence, emitted ETXs and coincident markers, keyed by
/// block hash.
#[derive(Default)]
pub struct InMemoryHeaderChain {
    data: RwLock<ChainData>,
}

impl InMemoryHeaderChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a header without state. Returns its hash.
    pub fn insert_header(&self, header: Header) -> Hash {
        let hash = header.hash();
        debug!("[hc-03] Storing header {} at height {}", hash.terminal_string(), header.number);
        self.data.write().headers.insert(hash, header);
        hash
    }

    /// Store a header together with its post-state. Returns its hash.
    pub fn insert_with_state(&self, header: Header) -> Hash {
        let hash = self.insert_header(header);
        self.data.write().with_state.insert(hash);
        hash
    }

    /// Drop the post-state of a block, keeping its header.
    pub fn prune_state(&self, hash: &Hash) {
        self.data.write().with_state.remove(hash);
    }

    /// Record the ETXs a block emitted.
    pub fn set_emitted_etxs(&self, hash: Hash, etxs: Vec<Transaction>) {
        self.data.write().emitted_etxs.insert(hash, etxs);
    }

    /// Mark a block as coincident with its dominant chain.
    pub fn mark_coincident(&self, hash: Hash) {
        self.data.write().coincident.insert(hash);
    }

    /// Number of stored headers.
    pub fn len(&self) -> usize {
        self.data.read().headers.len()
    }

    /// Whether no headers are stored.
    pub fn is_empty(&self) -> bool {
        self.data.read().headers.is_empty()
    }
}

impl BlockAvailability for InMemoryHeaderChain {
    fn has_block_and_state(&self, hash: &Hash, number: u64) -> bool {
        let data = self.data.read();
        data.headers.get(hash).is_some_and(|h| h.number == number) && data.with_state.contains(hash)
    }

    fn has_block(&self, hash: &Hash, number: u64) -> bool {
        self.data
            .read()
            .headers
            .get(hash)
            .is_some_and(|h| h.number == number)
    }
}

impl HeaderReader for InMemoryHeaderChain {
    fn get_header(&self, hash: &Hash, number: u64) -> Option<Header> {
        self.data
            .read()
            .headers
            .get(hash)
            .filter(|h| h.number == number)
            .cloned()
    }
}

impl EtxRollupProvider for InMemoryHeaderChain {
    /// Walks back from the parent until a coincident block or genesis,
    /// neither of which contributes.
    fn collect_etx_rollup(&self, block: &Block) -> Result<Vec<Transaction>, HistoryError> {
        let Some(mut number) = block.number().checked_sub(1) else {
            return Ok(Vec::new());
        };
        let mut hash = block.parent_hash();
        let data = self.data.read();
        let mut segments = Vec::new();

        while number > 0 && !data.coincident.contains(&hash) {
            let header = data
                .headers
                .get(&hash)
                .filter(|h| h.number == number)
                .ok_or(HistoryError::UnknownBlock { hash, number })?;
            if let Some(etxs) = data.emitted_etxs.get(&hash) {
                segments.push(etxs.clone());
            }
            hash = header.parent_hash;
            number -= 1;
        }

        segments.reverse();
        Ok(segments.into_iter().flatten().collect())
    }
}
