//! Reference adapters for the outbound ports

pub mod bloom;
pub mod engine;
pub mod header_chain;
pub mod root_hasher;

pub use bloom::LogsBloom;
pub use engine::{UncleRulesEngine, MAX_UNCLES, UNCLE_ANCESTRY_DEPTH};
pub use header_chain::InMemoryHeaderChain;
pub use root_hasher::KeccakRootHasher;
