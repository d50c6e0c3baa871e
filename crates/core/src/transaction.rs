//! Transaction types.

use serde::{Deserialize, Serialize};

/// A transaction as it appears inside a block.
///
/// An empty `sender` or `recipient` means the system itself (mining rewards).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's address, or empty for the system.
    pub sender: String,
    /// Recipient's address, or empty for the system.
    pub recipient: String,
    /// Value transferred.
    pub amount: f64,
}

/// Request body for `POST /transactions/new`.
///
/// Only built from form input, with the amount already parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub sender: String,
    pub recipient: String,
    pub amount: f64,
}

impl NewTransaction {
    /// Create a new transaction request.
    pub fn new(sender: impl Into<String>, recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}
