//! # Shared Fixtures
//!
//! Builders for chains, addresses and blocks whose headers commit to their
//! bodies and execution results.

use hc_01_location::Location;
use hc_02_sharding::PrefixTable;
use hc_03_block_validation::{
    calc_uncle_hash, emitted_etxs, BloomCalculator, Block, BlockValidator, Body, ChainConfig,
    EtxRollupProvider, Header, InMemoryHeaderChain, LogsBloom, PostState, Receipt, StoreError,
    Transaction, TxType, UncleRulesEngine,
};
use shared_types::{Address, Hash, U256};
use std::sync::Arc;

/// Validator over the in-memory chain with the reference engine.
pub type Validator = BlockValidator<InMemoryHeaderChain, UncleRulesEngine>;

/// State root every fixture block commits to.
pub const STATE_ROOT: Hash = Hash::new([0x5e; 32]);

/// Gas charged per fixture transaction.
pub const TX_GAS: u64 = 21_000;

/// Post-state that always reports one root.
pub struct StaticPostState(pub Hash);

impl PostState for StaticPostState {
    fn intermediate_root(&self, _delete_empty_objects: bool) -> Result<Hash, StoreError> {
        Ok(self.0)
    }
}

/// Address owned by `location` under `table`, distinguished by `tag`.
pub fn address_in(table: &PrefixTable, location: &Location, tag: u8) -> Address {
    let mut bytes = [tag; 20];
    bytes[0] = table.range_of(location).lo();
    Address::new(bytes)
}

/// Local transfer between two addresses.
pub fn transfer(from: Address, to: Address, nonce: u64) -> Transaction {
    Transaction {
        chain_id: 1,
        nonce,
        gas: TX_GAS,
        to: Some(to),
        sender: Some(from),
        value: U256::from(1_000u64),
        ..Default::default()
    }
}

/// External transaction carrying `tx` to another chain.
pub fn as_etx(tx: &Transaction) -> Transaction {
    Transaction {
        tx_type: TxType::External,
        ..tx.clone()
    }
}

/// A chain with genesis and one block on top, both with state.
pub struct ChainFixture {
    pub chain: Arc<InMemoryHeaderChain>,
    pub head: Hash,
    pub height: u64,
}

impl ChainFixture {
    pub fn new() -> Self {
        let chain = Arc::new(InMemoryHeaderChain::new());
        let genesis = chain.insert_with_state(Header::default());
        let head = chain.insert_with_state(Header {
            parent_hash: genesis,
            number: 1,
            gas_limit: 8_000_000,
            ..Default::default()
        });
        Self {
            chain,
            head,
            height: 1,
        }
    }

    /// Append an accepted block that emitted `etxs`.
    pub fn extend(&mut self, etxs: Vec<Transaction>) -> Hash {
        let hash = self.chain.insert_with_state(Header {
            parent_hash: self.head,
            number: self.height + 1,
            gas_limit: 8_000_000,
            ..Default::default()
        });
        self.chain.set_emitted_etxs(hash, etxs);
        self.head = hash;
        self.height += 1;
        hash
    }

    /// Header for the next block.
    pub fn next_header(&self) -> Header {
        Header {
            parent_hash: self.head,
            number: self.height + 1,
            gas_limit: 8_000_000,
            ..Default::default()
        }
    }

    /// Validator for a node at `location`.
    pub fn validator(&self, location: Location) -> Validator {
        BlockValidator::new(
            ChainConfig::for_location(location),
            Arc::clone(&self.chain),
            Arc::new(UncleRulesEngine::default()),
        )
    }
}

impl Default for ChainFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill every body commitment: uncle, transaction and ETX roots, and the
/// manifest root of the validator's subordinate tier.
pub fn seal(validator: &Validator, mut header: Header, body: Body) -> Block {
    header.uncle_hash = calc_uncle_hash(&body.uncles);
    header.tx_hash = validator.derive_root(&body.transactions);
    header.etx_hash = validator.derive_root(&body.ext_transactions);
    if let Some(sub) = validator.config().tier().subordinate() {
        header.set_manifest_hash(sub, validator.derive_root(&body.sub_manifest));
    }
    Block::new(header, body)
}

/// Seal `body` and also commit to `receipts`, [`STATE_ROOT`] and the ETX
/// rollup: the chain's history for the new block followed by its own
/// emitted ETXs.
pub fn seal_executed(
    validator: &Validator,
    chain: &InMemoryHeaderChain,
    mut header: Header,
    body: Body,
    receipts: &[Receipt],
) -> Block {
    let shell = Block::new(header.clone(), Body::default());
    let mut rollup = chain.collect_etx_rollup(&shell).unwrap_or_default();
    rollup.extend(emitted_etxs(receipts));

    header.gas_used = receipts.last().map_or(0, |r| r.cumulative_gas_used);
    header.bloom = LogsBloom.bloom_of(receipts);
    header.receipt_hash = validator.derive_root(receipts);
    header.root = STATE_ROOT;
    header.etx_rollup_hash = validator.derive_root(&rollup);
    seal(validator, header, body)
}
