//! # Shared Types Crate
//!
//! Fixed-width identifiers used by every Hierarchy-Chain subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Hash` and `Address` are defined once here.
//! - **Total Byte Construction**: building an identifier from raw bytes never
//!   fails. Short input is right-aligned, long input is cropped from the left.
//! - **Fallible Text Parsing**: hex input is the only fallible path and reports
//!   a machine-readable [`HexError`].

pub mod entities;
pub mod errors;
pub mod hashing;

pub use entities::*;
pub use errors::*;
pub use hashing::{keccak256, EMPTY_ROOT_HASH, EMPTY_UNCLE_HASH};
