//! HTTP client for the BlockWave backend.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        Explorer (page state, polling)         │
//! └──────────────────────┬───────────────────────┘
//!                        │ ChainApi
//! ┌──────────────────────▼───────────────────────┐
//! │  ApiClient                                    │
//! │   GET  /chain             -> ChainResponse    │
//! │   GET  /mine              -> MineResponse     │
//! │   POST /transactions/new  -> TransactionResp. │
//! └──────────┬───────────────────────┬───────────┘
//!            │ reqwest               │ Notifier
//!            ▼                       ▼
//!      backend (HTTP)        terminal / in-memory
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use blockwave_client::{ApiClient, ChainApi, ClientConfig, TerminalNotifier};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), blockwave_client::ClientError> {
//! let client = ApiClient::new(&ClientConfig::default(), Arc::new(TerminalNotifier))?;
//! let chain = client.fetch_chain().await;
//! println!("{} blocks", chain.length);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod notify;

// Re-export commonly used types
pub use api::{ApiClient, ChainApi};
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_POLL_INTERVAL};
pub use error::{ClientError, Result};
pub use notify::{MemoryNotifier, Notification, NotificationKind, Notifier, TerminalNotifier};
