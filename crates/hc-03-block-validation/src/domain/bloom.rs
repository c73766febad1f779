//! Log bloom filter
//!
//! 2048-bit filter over log addresses and topics. Each input sets three bits
//! taken from the first six bytes of its keccak256 digest.

use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use shared_types::keccak256;
use std::fmt;

/// Bloom width in bytes.
pub const BLOOM_BYTE_LENGTH: usize = 256;

/// Bloom width in bits.
pub const BLOOM_BIT_LENGTH: usize = BLOOM_BYTE_LENGTH * 8;

/// A 2048-bit log bloom.
#[serde_as]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bloom(#[serde_as(as = "Bytes")] [u8; BLOOM_BYTE_LENGTH]);

impl Bloom {
    /// Bloom with no bits set.
    pub const EMPTY: Self = Self([0u8; BLOOM_BYTE_LENGTH]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; BLOOM_BYTE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; BLOOM_BYTE_LENGTH] {
        &self.0
    }

    // Byte index and bit mask for the three bits of `input`.
    fn positions(input: &[u8]) -> [(usize, u8); 3] {
        let digest = keccak256(input);
        let h = digest.as_bytes();
        let mut out = [(0usize, 0u8); 3];
        for (k, slot) in out.iter_mut().enumerate() {
            let i = 2 * k;
            let bit = ((h[i] as usize) << 8 | h[i + 1] as usize) & (BLOOM_BIT_LENGTH - 1);
            *slot = (BLOOM_BYTE_LENGTH - 1 - bit / 8, 1u8 << (bit % 8));
        }
        out
    }

    /// Set the bits for `input`.
    pub fn accrue(&mut self, input: &[u8]) {
        for (byte, mask) in Self::positions(input) {
            self.0[byte] |= mask;
        }
    }

    /// OR another bloom into this one.
    pub fn accrue_bloom(&mut self, other: &Bloom) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a |= *b;
        }
    }

    /// Whether all bits for `input` are set. False positives are possible.
    pub fn contains_input(&self, input: &[u8]) -> bool {
        Self::positions(input)
            .iter()
            .all(|&(byte, mask)| self.0[byte] & mask == mask)
    }

    /// Whether no bits are set.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Lowercase `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl Default for Bloom {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl fmt::Display for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Bloom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.0.iter().map(|b| b.count_ones()).sum::<u32>();
        write!(f, "Bloom({} bits set)", set)
    }
}

impl Encodable for Bloom {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}
