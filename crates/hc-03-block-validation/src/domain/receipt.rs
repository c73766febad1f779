//! Receipts and logs
//!
//! A receipt records the outcome of one transaction. Only successful
//! receipts contribute their emitted external transactions to the block.

use super::bloom::Bloom;
use super::transaction::Transaction;
use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};

/// Execution outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReceiptStatus {
    /// Execution reverted or failed.
    Failed,
    /// Execution succeeded.
    #[default]
    Successful,
}

impl ReceiptStatus {
    /// Wire value.
    pub fn as_u8(self) -> u8 {
        match self {
            ReceiptStatus::Failed => 0,
            ReceiptStatus::Successful => 1,
        }
    }
}

/// An event emitted during execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Log {
    /// Emitting contract.
    pub address: Address,
    /// Indexed topics.
    pub topics: Vec<Hash>,
    /// Unindexed payload.
    pub data: Vec<u8>,
}

impl Encodable for Log {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3);
        s.append(&self.address);
        s.begin_list(self.topics.len());
        for topic in &self.topics {
            s.append(topic);
        }
        s.append(&self.data);
    }
}

/// Outcome of one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Receipt {
    pub status: ReceiptStatus,
    pub cumulative_gas_used: u64,
    pub logs: Vec<Log>,
    /// External transactions emitted by this transaction, in emission order.
    pub etxs: Vec<Transaction>,
    pub tx_hash: Hash,
    pub gas_used: u64,
}

impl Receipt {
    /// Whether the transaction succeeded.
    pub fn is_successful(&self) -> bool {
        self.status == ReceiptStatus::Successful
    }

    /// Bloom over this receipt's log addresses and topics.
    pub fn bloom(&self) -> Bloom {
        let mut bloom = Bloom::default();
        for log in &self.logs {
            bloom.accrue(log.address.as_bytes());
            for topic in &log.topics {
                bloom.accrue(topic.as_bytes());
            }
        }
        bloom
    }
}

/// Consensus encoding: status, cumulative gas, logs, emitted ETXs.
/// Transaction hash and per-transaction gas are derived data and not encoded.
impl Encodable for Receipt {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(4);
        s.append(&self.status.as_u8());
        s.append(&self.cumulative_gas_used);
        s.begin_list(self.logs.len());
        for log in &self.logs {
            s.append(log);
        }
        s.begin_list(self.etxs.len());
        for etx in &self.etxs {
            s.append(etx);
        }
    }
}

/// External transactions emitted by successful receipts, in receipt order.
pub fn emitted_etxs(receipts: &[Receipt]) -> Vec<Transaction> {
    receipts
        .iter()
        .filter(|r| r.is_successful())
        .flat_map(|r| r.etxs.iter().cloned())
        .collect()
}
