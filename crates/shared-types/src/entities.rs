//! # Core Identifier Entities
//!
//! Fixed-width binary identifiers shared across subsystems:
//!
//! - [`Hash`]: 32-byte content digest.
//! - [`Address`]: 20-byte account address with EIP-55 checksum rendering.
//! - [`MixedcaseAddress`]: an address together with the spelling it was parsed from.

use crate::errors::HexError;
use crate::hashing::keccak256;
use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

/// Length of a [`Hash`] in bytes.
pub const HASH_LENGTH: usize = 32;

/// Length of an [`Address`] in bytes.
pub const ADDRESS_LENGTH: usize = 20;

// =============================================================================
// HEX HELPERS
// =============================================================================

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Decode hex text of any even length, with or without `0x`.
pub fn decode_hex(s: &str) -> Result<Vec<u8>, HexError> {
    hex::decode(strip_hex_prefix(s)).map_err(|_| HexError::MalformedHex(s.to_string()))
}

/// Copy `b` into an `N`-byte array, right-aligned.
///
/// Shorter input is zero-filled on the left, longer input keeps only its
/// rightmost `N` bytes.
fn right_aligned<const N: usize>(b: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    let src = if b.len() > N { &b[b.len() - N..] } else { b };
    out[N - src.len()..].copy_from_slice(src);
    out
}

/// Whether `s` is exactly one hex-encoded address, with or without `0x`.
pub fn is_hex_address(s: &str) -> bool {
    let s = strip_hex_prefix(s);
    s.len() == 2 * ADDRESS_LENGTH && s.bytes().all(|c| c.is_ascii_hexdigit())
}

// =============================================================================
// HASH
// =============================================================================

/// A 32-byte digest (keccak256 of arbitrary data).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash([u8; HASH_LENGTH]);

impl Hash {
    /// The all-zero digest.
    pub const ZERO: Self = Self([0u8; HASH_LENGTH]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build from a byte slice of any length (right-aligned, cropped from the left).
    pub fn from_slice(b: &[u8]) -> Self {
        Self(right_aligned(b))
    }

    /// Parse hex text of any even length; see [`Hash::from_slice`] for sizing.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        decode_hex(s).map(|b| Self::from_slice(&b))
    }

    /// Parse hex text that must encode exactly 32 bytes.
    pub fn from_hex_exact(s: &str) -> Result<Self, HexError> {
        let b = decode_hex(s)?;
        if b.len() != HASH_LENGTH {
            return Err(HexError::InvalidLength {
                kind: "Hash",
                expected: HASH_LENGTH,
                actual: b.len(),
            });
        }
        Ok(Self::from_slice(&b))
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Short form for console logs, e.g. `56e81f..63b421`.
    pub fn terminal_string(&self) -> String {
        format!(
            "{}..{}",
            hex::encode(&self.0[..3]),
            hex::encode(&self.0[HASH_LENGTH - 3..])
        )
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_LENGTH]
    }
}

impl From<[u8; HASH_LENGTH]> for Hash {
    fn from(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl FromStr for Hash {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_exact(s)
    }
}

impl Encodable for Hash {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_exact(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// ADDRESS
// =============================================================================

/// A 20-byte account address.
///
/// The zero address is reserved for protocol operations and is in scope on
/// every chain regardless of shard partitioning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The reserved zero address.
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Wrap raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build from a byte slice of any length (right-aligned, cropped from the left).
    pub fn from_slice(b: &[u8]) -> Self {
        Self(right_aligned(b))
    }

    /// Parse hex text of any even length; see [`Address::from_slice`] for sizing.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        decode_hex(s).map(|b| Self::from_slice(&b))
    }

    /// Parse hex text that must encode exactly 20 bytes.
    pub fn from_hex_exact(s: &str) -> Result<Self, HexError> {
        let b = decode_hex(s)?;
        if b.len() != ADDRESS_LENGTH {
            return Err(HexError::InvalidLength {
                kind: "Address",
                expected: ADDRESS_LENGTH,
                actual: b.len(),
            });
        }
        Ok(Self::from_slice(&b))
    }

    /// Borrow the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// First byte of the address, which selects its shard partition.
    pub fn prefix(&self) -> u8 {
        self.0[0]
    }

    /// Whether this is the reserved zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_LENGTH]
    }

    /// Left-pad to a 32-byte [`Hash`].
    pub fn to_hash(&self) -> Hash {
        Hash::from_slice(&self.0)
    }

    /// Lowercase `0x`-prefixed hex, without checksum.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// EIP-55 mixed-case checksummed hex.
    ///
    /// A letter digit is upper-cased iff the matching nibble of
    /// `keccak256(lowercase_hex)` is greater than 7.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());
        let mut out = String::with_capacity(2 + lower.len());
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let byte = digest.as_bytes()[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble > 7 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_exact(s)
    }
}

impl Encodable for Address {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.encoder().encode_value(&self.0);
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_exact(&s).map_err(serde::de::Error::custom)
    }
}

/// An address together with the exact text it was parsed from, which may or
/// may not carry a correct checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedcaseAddress {
    addr: Address,
    original: String,
}

impl MixedcaseAddress {
    /// Wrap an address, using its checksummed form as the original text.
    pub fn new(addr: Address) -> Self {
        Self {
            addr,
            original: addr.to_checksum(),
        }
    }

    /// Parse user-supplied text, keeping its spelling.
    pub fn parse(s: &str) -> Result<Self, HexError> {
        if !is_hex_address(s) {
            return Err(HexError::MalformedHex(s.to_string()));
        }
        Ok(Self {
            addr: Address::from_hex_exact(s)?,
            original: s.to_string(),
        })
    }

    /// The decoded address.
    pub fn address(&self) -> Address {
        self.addr
    }

    /// The text as supplied.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Whether the original text is the exact EIP-55 form of the address.
    pub fn valid_checksum(&self) -> bool {
        let original = strip_hex_prefix(&self.original);
        original == &self.addr.to_checksum()[2..]
    }
}

impl fmt::Display for MixedcaseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid_checksum() {
            write!(f, "{} [chksum ok]", self.original)
        } else {
            write!(f, "{} [chksum INVALID]", self.original)
        }
    }
}
