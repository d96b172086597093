//! # Refresh Scheduler
//!
//! Periodic timer driving a fetch-and-replace callback: the callback runs
//! immediately on start, then at a fixed wall-clock interval until the
//! scheduler is stopped. The callback itself is synchronous and spawns
//! the actual fetch task, so ticks never slip behind a slow fetch and
//! overlapping fetches are possible by design — results are applied in
//! arrival order, without a sequence guard.

use std::time::Duration;
use tokio::task::JoinHandle;

/// Owns the timer task of one periodic refresh.
pub struct RefreshScheduler {
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    /// Spawn the timer task. `tick` fires once immediately, then every
    /// `period`. Must be called within a tokio runtime context.
    pub fn start<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                tick();
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Cancel the timer so no further ticks fire. Idempotent. Fetches
    /// already in flight are not cancelled; their results are applied (or
    /// dropped with the channel) on arrival.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const PERIOD: Duration = Duration::from_secs(120);

    #[tokio::test(start_paused = true)]
    async fn fires_immediately_then_at_fixed_intervals() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let _scheduler = RefreshScheduler::start(PERIOD, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Yield so the timer task gets to run its first (immediate) tick
        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(PERIOD).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);

        tokio::time::sleep(PERIOD * 3).await;
        assert_eq!(count.load(Ordering::SeqCst), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_future_ticks_and_is_idempotent() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = count.clone();
        let mut scheduler = RefreshScheduler::start(PERIOD, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());

        tokio::time::sleep(PERIOD * 10).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
