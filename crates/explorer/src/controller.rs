//! Explorer page controller.
//!
//! Owns the cached chain and the two independent UI flags:
//! - `loading`: at least one chain fetch is in flight
//! - `mining`: a mine request is in flight
//!
//! Refreshes may overlap (background poll and user action). Each refresh is
//! tagged with a sequence number when issued and its response is applied only
//! if no newer refresh has been applied already.

use crate::poller::PollHandle;
use blockwave_client::{ChainApi, ClientError, Notifier};
use blockwave_core::{Block, MineResponse};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Errors returned by explorer actions.
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("a block is already being mined")]
    MiningInProgress,

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Point-in-time copy of the explorer state, ready for rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExplorerSnapshot {
    /// Blocks in fetched order (oldest first).
    pub chain: Vec<Block>,
    pub loading: bool,
    pub mining: bool,
}

impl ExplorerSnapshot {
    /// Blocks in display order, most recent first.
    pub fn newest_first(&self) -> impl Iterator<Item = &Block> {
        self.chain.iter().rev()
    }
}

#[derive(Debug, Default)]
struct ChainState {
    chain: Vec<Block>,
    /// Sequence number of the refresh whose response is currently shown.
    applied_seq: u64,
    /// Number of refreshes awaiting a response.
    in_flight: usize,
}

/// Page controller for the chain view.
pub struct Explorer<A> {
    api: A,
    notifier: Arc<dyn Notifier>,
    state: RwLock<ChainState>,
    mining: AtomicBool,
    next_seq: AtomicU64,
    changes: watch::Sender<u64>,
}

impl<A: ChainApi> Explorer<A> {
    /// Create an explorer with an empty chain.
    pub fn new(api: A, notifier: Arc<dyn Notifier>) -> Self {
        let (changes, _) = watch::channel(0);
        Self {
            api,
            notifier,
            state: RwLock::new(ChainState::default()),
            mining: AtomicBool::new(false),
            next_seq: AtomicU64::new(0),
            changes,
        }
    }

    /// The API the explorer talks to.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// The notification service shared with the API client.
    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Receiver that is marked changed on every visible state change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changes.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ExplorerSnapshot {
        let state = self.read();
        ExplorerSnapshot {
            chain: state.chain.clone(),
            loading: state.in_flight > 0,
            mining: self.is_mining(),
        }
    }

    /// Cached blocks, most recent first.
    pub fn chain_newest_first(&self) -> Vec<Block> {
        self.read().chain.iter().rev().cloned().collect()
    }

    pub fn is_loading(&self) -> bool {
        self.read().in_flight > 0
    }

    pub fn is_mining(&self) -> bool {
        self.mining.load(Ordering::SeqCst)
    }

    /// Fetch the chain and replace the cached copy.
    ///
    /// Returns `false` when the response was discarded because a newer
    /// refresh had already been applied.
    pub async fn refresh(&self) -> bool {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let fetch = FetchGuard::enter(self);

        let response = self.api.fetch_chain().await;

        let applied = {
            let mut state = self.write();
            if seq > state.applied_seq {
                state.applied_seq = seq;
                state.chain = response.chain;
                true
            } else {
                false
            }
        };
        drop(fetch);

        if applied {
            debug!(seq, blocks = self.read().chain.len(), "applied chain refresh");
        } else {
            debug!(seq, "discarded stale chain refresh");
        }
        applied
    }

    /// Load the chain once, then keep it fresh every `interval` until the
    /// returned handle is cancelled or dropped.
    pub async fn activate(self: &Arc<Self>, interval: Duration) -> PollHandle
    where
        A: 'static,
    {
        info!(?interval, "activating explorer");
        self.refresh().await;
        PollHandle::spawn(Arc::clone(self), interval)
    }

    /// Mine a block, then refresh the chain.
    ///
    /// Refused while another mine request is in flight. On failure the chain
    /// is not refreshed and the error is returned after being logged.
    pub async fn mine(&self) -> Result<MineResponse> {
        let _guard = MiningGuard::acquire(self).ok_or(ExplorerError::MiningInProgress)?;

        match self.api.mine_block().await {
            Ok(mined) => {
                self.refresh().await;
                Ok(mined)
            }
            Err(e) => {
                warn!(error = %e, "mining failed");
                Err(e.into())
            }
        }
    }

    /// Called after the transaction form reports success.
    pub async fn transaction_completed(&self) {
        self.refresh().await;
    }

    fn changed(&self) {
        self.changes.send_modify(|version| *version = version.wrapping_add(1));
    }

    fn read(&self) -> RwLockReadGuard<'_, ChainState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, ChainState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Counts one chain fetch toward `loading` until dropped, so an abandoned
/// refresh future does not leave the flag set.
struct FetchGuard<'a, A: ChainApi> {
    explorer: &'a Explorer<A>,
}

impl<'a, A: ChainApi> FetchGuard<'a, A> {
    fn enter(explorer: &'a Explorer<A>) -> Self {
        explorer.write().in_flight += 1;
        explorer.changed();
        Self { explorer }
    }
}

impl<A: ChainApi> Drop for FetchGuard<'_, A> {
    fn drop(&mut self) {
        {
            let mut state = self.explorer.write();
            state.in_flight = state.in_flight.saturating_sub(1);
        }
        self.explorer.changed();
    }
}

/// Holds the `mining` flag; clears it when dropped, even if the mine future
/// is cancelled.
struct MiningGuard<'a, A: ChainApi> {
    explorer: &'a Explorer<A>,
}

impl<'a, A: ChainApi> MiningGuard<'a, A> {
    fn acquire(explorer: &'a Explorer<A>) -> Option<Self> {
        explorer
            .mining
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        explorer.changed();
        Some(Self { explorer })
    }
}

impl<A: ChainApi> Drop for MiningGuard<'_, A> {
    fn drop(&mut self) {
        self.explorer.mining.store(false, Ordering::SeqCst);
        self.explorer.changed();
    }
}
