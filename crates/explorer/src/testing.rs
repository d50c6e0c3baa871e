//! In-memory `ChainApi` for unit tests.

use async_trait::async_trait;
use blockwave_client::{ChainApi, ClientError, Result};
use blockwave_core::{Block, ChainResponse, MineResponse, TransactionResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub fn block(index: u64) -> Block {
    Block {
        index,
        timestamp: 1_700_000_000.0 + index as f64 * 60.0,
        transactions: Vec::new(),
        proof: 100 + index,
        previous_hash: format!("hash-{}", index.saturating_sub(1)),
    }
}

pub fn chain(blocks: &[Block]) -> ChainResponse {
    ChainResponse {
        chain: blocks.to_vec(),
        length: blocks.len(),
    }
}

/// Replays queued chain responses and counts every call.
///
/// When the queue is empty, `fetch_chain` answers with the empty chain.
#[derive(Default)]
pub struct ScriptedApi {
    chains: Mutex<VecDeque<(Duration, ChainResponse)>>,
    fetch_calls: AtomicUsize,
    mine_calls: AtomicUsize,
    mine_delay: Mutex<Duration>,
    mine_fails: AtomicBool,
    tx_fails: AtomicBool,
    transactions: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_chain(&self, chain: ChainResponse) {
        self.push_delayed_chain(Duration::ZERO, chain);
    }

    pub fn push_delayed_chain(&self, delay: Duration, chain: ChainResponse) {
        self.chains.lock().unwrap().push_back((delay, chain));
    }

    pub fn set_mine_delay(&self, delay: Duration) {
        *self.mine_delay.lock().unwrap() = delay;
    }

    pub fn fail_mining(&self, fail: bool) {
        self.mine_fails.store(fail, Ordering::SeqCst);
    }

    pub fn fail_transactions(&self, fail: bool) {
        self.tx_fails.store(fail, Ordering::SeqCst);
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn mine_calls(&self) -> usize {
        self.mine_calls.load(Ordering::SeqCst)
    }

    pub fn transactions(&self) -> Vec<(String, String, String)> {
        self.transactions.lock().unwrap().clone()
    }
}

fn backend_error(message: &str) -> ClientError {
    ClientError::Status {
        status: 500,
        message: message.to_string(),
    }
}

#[async_trait]
impl ChainApi for ScriptedApi {
    async fn fetch_chain(&self) -> ChainResponse {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.chains.lock().unwrap().pop_front();
        let (delay, chain) = next.unwrap_or_default();

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        chain
    }

    async fn mine_block(&self) -> Result<MineResponse> {
        self.mine_calls.fetch_add(1, Ordering::SeqCst);
        let delay = *self.mine_delay.lock().unwrap();

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.mine_fails.load(Ordering::SeqCst) {
            return Err(backend_error("mining failed"));
        }
        Ok(MineResponse {
            message: "New Block Mined!".to_string(),
            block: None,
        })
    }

    async fn create_transaction(
        &self,
        sender: &str,
        recipient: &str,
        amount: &str,
    ) -> Result<TransactionResponse> {
        self.transactions.lock().unwrap().push((
            sender.to_string(),
            recipient.to_string(),
            amount.to_string(),
        ));

        if self.tx_fails.load(Ordering::SeqCst) {
            return Err(backend_error("rejected"));
        }
        Ok(TransactionResponse {
            message: "Transaction will be added to Block 2".to_string(),
        })
    }
}
