//! Keccak binary Merkle root
//!
//! Leaves are padded to a power of two with zero hashes, then combined
//! pairwise bottom-up. Leaf and node hashes are domain-separated so a leaf
//! can never be confused with an interior node.

use crate::ports::RootHasher;
use sha3::{Digest, Keccak256};
use shared_types::{Hash, EMPTY_ROOT_HASH};

const LEAF_PREFIX: u8 = 0x00;
const NODE_PREFIX: u8 = 0x01;

/// Reference [`RootHasher`].
#[derive(Clone, Copy, Debug, Default)]
pub struct KeccakRootHasher;

impl KeccakRootHasher {
    /// Create a hasher.
    pub fn new() -> Self {
        Self
    }

    fn hash_leaf(leaf: &[u8]) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update([LEAF_PREFIX]);
        hasher.update(leaf);
        Hash::new(hasher.finalize().into())
    }

    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update([NODE_PREFIX]);
        hasher.update(left);
        hasher.update(right);
        Hash::new(hasher.finalize().into())
    }
}

impl RootHasher for KeccakRootHasher {
    fn merkle_root(&self, leaves: &[Vec<u8>]) -> Hash {
        if leaves.is_empty() {
            return EMPTY_ROOT_HASH;
        }

        // Pad to power of two (minimum 2)
        let width = leaves.len().next_power_of_two().max(2);
        let mut level: Vec<Hash> = leaves.iter().map(|l| Self::hash_leaf(l)).collect();
        level.resize(width, Hash::ZERO);

        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| Self::hash_pair(&pair[0], &pair[1]))
                .collect();
        }
        level[0]
    }
}
