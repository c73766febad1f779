//! # Error Types
//!
//! Defines error types used when decoding identifiers from text.

use thiserror::Error;

/// Errors that can occur while decoding hex-encoded identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// Input contains a non-hex character or has an odd number of digits.
    #[error("Malformed hex: {0:?}")]
    MalformedHex(String),

    /// Input decoded cleanly but does not have the exact expected width.
    #[error("Invalid length for {kind}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Identifier being decoded ("Hash", "Address").
        kind: &'static str,
        /// Required byte width.
        expected: usize,
        /// Decoded byte width.
        actual: usize,
    },
}
