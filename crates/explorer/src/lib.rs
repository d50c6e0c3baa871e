//! Page-level state for the BlockWave explorer.
//!
//! This crate holds everything between the API client and the renderer:
//! - **Explorer**: cached chain, `loading`/`mining` flags, refresh and mine actions
//! - **Poller**: cancellable background refresh
//! - **TransactionForm**: modal form state, validation and submission
//!
//! # Example
//!
//! ```rust,no_run
//! use blockwave_client::{ApiClient, ClientConfig, Notifier, TerminalNotifier};
//! use blockwave_explorer::Explorer;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::default();
//! let notifier: Arc<dyn Notifier> = Arc::new(TerminalNotifier);
//! let api = ApiClient::new(&config, notifier.clone())?;
//!
//! let explorer = Arc::new(Explorer::new(api, notifier));
//! let poller = explorer.activate(config.poll_interval).await;
//!
//! explorer.mine().await?;
//! println!("{} blocks", explorer.snapshot().chain.len());
//!
//! poller.cancel();
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod form;
pub mod poller;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use controller::{Explorer, ExplorerError, ExplorerSnapshot};
pub use form::{SubmitOutcome, TransactionForm};
pub use poller::PollHandle;
