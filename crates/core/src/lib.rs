//! Core types for the BlockWave explorer.
//!
//! This crate provides the data shared by every other crate in the workspace:
//! - Blocks and transactions exactly as the backend serializes them
//! - Response envelopes for the three backend endpoints
//! - Display formatting (timestamps, party labels)
//! - Validation of raw transaction form input
//!
//! Nothing here hashes, verifies or orders blocks. The backend is the source
//! of truth and its responses are taken verbatim.

pub mod block;
pub mod format;
pub mod response;
pub mod transaction;
pub mod validation;

// Re-export commonly used types at the crate root
pub use block::Block;
pub use format::{format_timestamp, format_timestamp_in, party_label, SYSTEM_LABEL};
pub use response::{ChainResponse, MineResponse, TransactionResponse};
pub use transaction::{NewTransaction, Transaction};
pub use validation::{validate_transaction_input, ValidationError};
