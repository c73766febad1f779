//! Transactions
//!
//! One type covers both local transactions and external transactions
//! (ETXs), which cross chain boundaries and carry their originating sender.

use rlp::{Encodable, RlpStream};
use serde::{Deserialize, Serialize};
use shared_types::{keccak256, Address, Hash, U256};

/// Transaction kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TxType {
    /// Executes on the chain it was included in.
    #[default]
    Internal,
    /// Emitted on one chain for processing on another.
    External,
}

impl TxType {
    /// Wire tag.
    pub fn as_u8(self) -> u8 {
        match self {
            TxType::Internal => 0,
            TxType::External => 1,
        }
    }
}

/// A transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Transaction {
    pub tx_type: TxType,
    pub chain_id: u64,
    pub nonce: u64,
    pub gas_price: U256,
    pub gas: u64,
    /// `None` for contract creation.
    pub to: Option<Address>,
    pub value: U256,
    pub data: Vec<u8>,
    /// Originating account of an external transaction.
    pub sender: Option<Address>,
}

impl Transaction {
    /// Keccak256 of the RLP encoding.
    pub fn hash(&self) -> Hash {
        keccak256(&rlp::encode(self))
    }

    /// Whether this is an external transaction.
    pub fn is_external(&self) -> bool {
        self.tx_type == TxType::External
    }
}

fn append_optional_address(s: &mut RlpStream, addr: &Option<Address>) {
    match addr {
        Some(a) => s.append(a),
        None => s.append_empty_data(),
    };
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(9);
        s.append(&self.tx_type.as_u8());
        s.append(&self.chain_id);
        s.append(&self.nonce);
        s.append(&self.gas_price);
        s.append(&self.gas);
        append_optional_address(s, &self.to);
        s.append(&self.value);
        s.append(&self.data);
        append_optional_address(s, &self.sender);
    }
}
