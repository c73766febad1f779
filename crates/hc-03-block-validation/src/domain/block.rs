//! Block domain entities
//!
//! A header commits to the block body through a set of roots, and to the
//! subordinate chains through one manifest root per tier.

use super::bloom::Bloom;
use super::transaction::Transaction;
use hc_01_location::{Tier, HIERARCHY_DEPTH};
use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};
use shared_types::{keccak256, Address, Hash, EMPTY_ROOT_HASH, EMPTY_UNCLE_HASH, U256};

/// Block header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub parent_hash: Hash,
    /// Hash of the RLP list of uncle headers.
    pub uncle_hash: Hash,
    pub coinbase: Address,
    /// Post-execution state root.
    pub root: Hash,
    pub tx_hash: Hash,
    /// Root of the external transactions carried in the body.
    pub etx_hash: Hash,
    /// Root of the ETXs emitted since the last coincident block.
    pub etx_rollup_hash: Hash,
    /// Manifest root per tier, indexed by [`Tier::index`].
    pub manifest_hash: [Hash; HIERARCHY_DEPTH],
    pub receipt_hash: Hash,
    pub bloom: Bloom,
    pub difficulty: U256,
    pub number: u64,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra: Vec<u8>,
    pub nonce: u64,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            parent_hash: Hash::ZERO,
            uncle_hash: EMPTY_UNCLE_HASH,
            coinbase: Address::ZERO,
            root: EMPTY_ROOT_HASH,
            tx_hash: EMPTY_ROOT_HASH,
            etx_hash: EMPTY_ROOT_HASH,
            etx_rollup_hash: EMPTY_ROOT_HASH,
            manifest_hash: [EMPTY_ROOT_HASH; HIERARCHY_DEPTH],
            receipt_hash: EMPTY_ROOT_HASH,
            bloom: Bloom::default(),
            difficulty: U256::zero(),
            number: 0,
            gas_limit: 0,
            gas_used: 0,
            timestamp: 0,
            extra: Vec::new(),
            nonce: 0,
        }
    }
}

impl Header {
    /// Keccak256 of the RLP encoding.
    pub fn hash(&self) -> Hash {
        keccak256(&rlp::encode(self))
    }

    /// Manifest root committed for `tier`.
    pub fn manifest_hash(&self, tier: Tier) -> Hash {
        self.manifest_hash[tier.index()]
    }

    /// Set the manifest root for `tier`.
    pub fn set_manifest_hash(&mut self, tier: Tier, hash: Hash) {
        self.manifest_hash[tier.index()] = hash;
    }

    /// Whether this is a genesis header.
    pub fn is_genesis(&self) -> bool {
        self.number == 0 && self.parent_hash.is_zero()
    }
}

impl Encodable for Header {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(17);
        s.append(&self.parent_hash);
        s.append(&self.uncle_hash);
        s.append(&self.coinbase);
        s.append(&self.root);
        s.append(&self.tx_hash);
        s.append(&self.etx_hash);
        s.append(&self.etx_rollup_hash);
        s.begin_list(HIERARCHY_DEPTH);
        for hash in &self.manifest_hash {
            s.append(hash);
        }
        s.append(&self.receipt_hash);
        s.append(&self.bloom);
        s.append(&self.difficulty);
        s.append(&self.number);
        s.append(&self.gas_limit);
        s.append(&self.gas_used);
        s.append(&self.timestamp);
        s.append(&self.extra);
        s.append(&self.nonce);
    }
}

/// Hash of an uncle list: keccak256 of the RLP list of headers.
pub fn calc_uncle_hash(uncles: &[Header]) -> Hash {
    let mut s = RlpStream::new_list(uncles.len());
    for uncle in uncles {
        s.append(uncle);
    }
    keccak256(&s.out())
}

/// Block body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Body {
    pub transactions: Vec<Transaction>,
    pub uncles: Vec<Header>,
    pub ext_transactions: Vec<Transaction>,
    /// Subordinate block hashes since the last coincident block.
    pub sub_manifest: Vec<Hash>,
}

/// A block: header plus body. The hash is computed once on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    header: Header,
    body: Body,
    hash: Hash,
}

impl Block {
    /// Assemble a block.
    pub fn new(header: Header, body: Body) -> Self {
        let hash = header.hash();
        Self { header, body, hash }
    }

    /// Block hash.
    pub fn hash(&self) -> Hash {
        self.hash
    }

    /// Block number.
    pub fn number(&self) -> u64 {
        self.header.number
    }

    /// Parent hash.
    pub fn parent_hash(&self) -> Hash {
        self.header.parent_hash
    }

    /// Gas used as declared by the header.
    pub fn gas_used(&self) -> u64 {
        self.header.gas_used
    }

    /// Header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Body.
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Local transactions.
    pub fn transactions(&self) -> &[Transaction] {
        &self.body.transactions
    }

    /// Uncle headers.
    pub fn uncles(&self) -> &[Header] {
        &self.body.uncles
    }

    /// External transactions.
    pub fn ext_transactions(&self) -> &[Transaction] {
        &self.body.ext_transactions
    }

    /// Subordinate manifest.
    pub fn sub_manifest(&self) -> &[Hash] {
        &self.body.sub_manifest
    }

    /// Split into header and body.
    pub fn into_parts(self) -> (Header, Body) {
        (self.header, self.body)
    }
}
