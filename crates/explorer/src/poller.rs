//! Background chain refresh.

use crate::controller::Explorer;
use blockwave_client::ChainApi;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::info;

/// Shortest accepted poll period.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle to the periodic refresh task.
///
/// The timer stops when the handle is cancelled or dropped. A fetch that is
/// already in flight at that moment still completes and is applied.
#[derive(Debug)]
pub struct PollHandle {
    task: Option<JoinHandle<()>>,
    interval: Duration,
}

impl PollHandle {
    /// Refresh `explorer` every `interval`, first tick one interval from now.
    pub fn spawn<A>(explorer: Arc<Explorer<A>>, interval: Duration) -> Self
    where
        A: ChainApi + 'static,
    {
        let interval = interval.max(MIN_POLL_INTERVAL);

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                // Detached: aborting the timer leaves the fetch running.
                let refresh = Arc::clone(&explorer);
                let _ = tokio::spawn(async move {
                    refresh.refresh().await;
                })
                .await;
            }
        });

        info!(?interval, "chain polling started");
        Self {
            task: Some(task),
            interval,
        }
    }

    /// The effective poll period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Check if the refresh task is still running.
    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stop polling.
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("chain polling stopped");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
