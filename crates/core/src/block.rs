//! Block structure as reported by the backend.

use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};

/// One ledger block.
///
/// The client treats every field as opaque: it never recomputes the hash or
/// checks the proof, it only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Position of the block in the chain (genesis is 1 on the reference backend).
    pub index: u64,
    /// Unix timestamp in seconds. The backend emits fractional seconds.
    pub timestamp: f64,
    /// Transactions sealed in this block, in backend order.
    pub transactions: Vec<Transaction>,
    /// Proof-of-work value found by the backend.
    pub proof: u64,
    /// Hash of the previous block.
    pub previous_hash: String,
}

impl Block {
    /// Get the number of transactions in this block.
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    /// Check if this block carries no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
