//! Error types for the Block Validation subsystem
//!
//! Every validation error maps to an [`ErrorClass`] so callers can tell a
//! duplicate apart from missing data, a bad block, or an engine rejection.

use super::bloom::Bloom;
use hc_01_location::LocationError;
use shared_types::Hash;
use thiserror::Error;

/// How a caller should treat a validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Nothing wrong with the block; it is simply already known.
    Benign,
    /// The block cannot be judged yet; required data is missing.
    DataUnavailable,
    /// The block contradicts its own header.
    Invalid,
    /// Rejected by the consensus engine.
    Engine,
}

impl ErrorClass {
    /// Whether the block must be discarded.
    pub fn rejects_block(self) -> bool {
        matches!(self, ErrorClass::Invalid | ErrorClass::Engine)
    }
}

/// Failures reported by the consensus engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Too many uncles: {count} > {max}")]
    TooManyUncles { count: usize, max: usize },

    #[error("Duplicate uncle: {0}")]
    DuplicateUncle(Hash),

    #[error("Uncle is an ancestor: {0}")]
    UncleIsAncestor(Hash),

    #[error("Uncle has unknown parent: {0}")]
    DanglingUncle(Hash),

    #[error("Invalid uncle: {0}")]
    InvalidUncle(String),
}

/// Failures of the block-history collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("Unknown block {hash} at height {number}")]
    UnknownBlock { hash: Hash, number: u64 },

    #[error("History error: {0}")]
    Other(String),
}

/// Failures of the state store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Missing trie node: {0}")]
    MissingTrieNode(Hash),

    #[error("State store error: {0}")]
    Other(String),
}

/// Structural validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("Block already known: {hash} at height {number}")]
    AlreadyKnown { hash: Hash, number: u64 },

    #[error("Engine rejected block: {0}")]
    Engine(#[from] EngineError),

    #[error("Uncle root hash mismatch (remote: {remote} local: {local})")]
    UncleRootMismatch { remote: Hash, local: Hash },

    #[error("Transaction root hash mismatch (remote: {remote} local: {local})")]
    TxRootMismatch { remote: Hash, local: Hash },

    #[error("External transaction root hash mismatch (remote: {remote} local: {local})")]
    EtxRootMismatch { remote: Hash, local: Hash },

    #[error("Bad subordinate manifest (remote: {remote} local: {local})")]
    BadSubManifest { remote: Hash, local: Hash },

    #[error("Unknown ancestor: {hash} at height {number}")]
    UnknownAncestor { hash: Hash, number: u64 },

    #[error("Pruned ancestor: {hash} at height {number}")]
    PrunedAncestor { hash: Hash, number: u64 },
}

impl BodyError {
    /// Classification of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            BodyError::AlreadyKnown { .. } => ErrorClass::Benign,
            BodyError::Engine(_) => ErrorClass::Engine,
            BodyError::UnknownAncestor { .. } | BodyError::PrunedAncestor { .. } => {
                ErrorClass::DataUnavailable
            }
            BodyError::UncleRootMismatch { .. }
            | BodyError::TxRootMismatch { .. }
            | BodyError::EtxRootMismatch { .. }
            | BodyError::BadSubManifest { .. } => ErrorClass::Invalid,
        }
    }

    /// Short label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            BodyError::AlreadyKnown { .. } => "already_known",
            BodyError::Engine(_) => "engine",
            BodyError::UncleRootMismatch { .. } => "uncle_root",
            BodyError::TxRootMismatch { .. } => "tx_root",
            BodyError::EtxRootMismatch { .. } => "etx_root",
            BodyError::BadSubManifest { .. } => "sub_manifest",
            BodyError::UnknownAncestor { .. } => "unknown_ancestor",
            BodyError::PrunedAncestor { .. } => "pruned_ancestor",
        }
    }
}

/// Post-execution validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Invalid gas used (remote: {remote} local: {local})")]
    GasMismatch { remote: u64, local: u64 },

    #[error("Invalid bloom (remote: {remote} local: {local})")]
    BloomMismatch { remote: Box<Bloom>, local: Box<Bloom> },

    #[error("Invalid receipt root hash (remote: {remote} local: {local})")]
    ReceiptRootMismatch { remote: Hash, local: Hash },

    #[error("Unable to compute state root: {0}")]
    StateRootComputation(#[source] StoreError),

    #[error("Invalid state root (remote: {remote} local: {local})")]
    StateRootMismatch { remote: Hash, local: Hash },

    #[error("Invalid ETX emission root (remote: {remote} local: {local})")]
    EtxEmissionMismatch { remote: Hash, local: Hash },

    #[error("Unable to get ETX rollup: {0}")]
    RollupUnavailable(#[source] HistoryError),

    #[error("Invalid ETX rollup root (remote: {remote} local: {local})")]
    RollupRootMismatch { remote: Hash, local: Hash },
}

impl StateError {
    /// Classification of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            StateError::StateRootComputation(_) | StateError::RollupUnavailable(_) => {
                ErrorClass::DataUnavailable
            }
            _ => ErrorClass::Invalid,
        }
    }

    /// Short label for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            StateError::GasMismatch { .. } => "gas_used",
            StateError::BloomMismatch { .. } => "bloom",
            StateError::ReceiptRootMismatch { .. } => "receipt_root",
            StateError::StateRootComputation(_) => "state_root_unavailable",
            StateError::StateRootMismatch { .. } => "state_root",
            StateError::EtxEmissionMismatch { .. } => "etx_emission",
            StateError::RollupUnavailable(_) => "rollup_unavailable",
            StateError::RollupRootMismatch { .. } => "etx_rollup",
        }
    }
}

/// Chain configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Invalid node location: {0}")]
    Location(#[from] LocationError),
}

/// Result type for structural validation
pub type BodyResult<T> = Result<T, BodyError>;

/// Result type for post-execution validation
pub type StateResult<T> = Result<T, StateError>;
