//! Block validation domain
//!
//! Blocks, transactions, receipts, the log bloom, chain configuration and
//! the validation error taxonomy.

pub mod block;
pub mod bloom;
pub mod config;
pub mod error;
pub mod receipt;
pub mod transaction;

pub use block::*;
pub use bloom::*;
pub use config::*;
pub use error::*;
pub use receipt::*;
pub use transaction::*;
