//! Response envelopes returned by the backend.

use crate::block::Block;
use serde::{Deserialize, Serialize};

/// Response of `GET /chain`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChainResponse {
    /// Every block, oldest first.
    pub chain: Vec<Block>,
    /// Number of blocks as reported by the backend.
    pub length: usize,
}

impl ChainResponse {
    /// The empty chain returned when the backend cannot be reached.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

/// Response of `GET /mine`.
///
/// Some backends nest the new block under `block`, others flatten its fields
/// next to `message`. Only the nested form is decoded into `block`; the flat
/// fields are ignored since the chain is re-fetched after mining anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Block>,
}

/// Response of `POST /transactions/new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_response() {
        let json = r#"{
            "chain": [{"index": 1, "timestamp": 1700000000, "transactions": [], "proof": 100, "previous_hash": "0"}],
            "length": 1
        }"#;

        let resp: ChainResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.length, 1);
        assert_eq!(resp.chain[0].index, 1);
    }

    #[test]
    fn test_empty_chain() {
        let resp = ChainResponse::empty();
        assert!(resp.is_empty());
        assert_eq!(resp.length, 0);
    }

    #[test]
    fn test_mine_response_nested_block() {
        let json = r#"{
            "message": "New Block Mined!",
            "block": {"index": 2, "timestamp": 1700000010.5, "transactions": [], "proof": 35293, "previous_hash": "abc"}
        }"#;

        let resp: MineResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.message, "New Block Mined!");
        assert_eq!(resp.block.unwrap().proof, 35293);
    }

    #[test]
    fn test_mine_response_flat_fields() {
        let json = r#"{
            "message": "New Block Mined!",
            "index": 2,
            "transactions": [{"sender": "0", "recipient": "node", "amount": 1}],
            "proof": 35293,
            "previous_hash": "abc"
        }"#;

        let resp: MineResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.message, "New Block Mined!");
        assert!(resp.block.is_none());
    }

    #[test]
    fn test_transaction_response() {
        let resp: TransactionResponse =
            serde_json::from_str(r#"{"message": "Transaction will be added to Block 3"}"#)
                .unwrap();
        assert_eq!(resp.message, "Transaction will be added to Block 3");
    }
}
