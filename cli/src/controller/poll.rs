use futures::future::BoxFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Shared "still active" flag for one controller instance.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn kill(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// A running periodic task. Every tick spawns one independent cycle, so a slow
/// cycle never delays the next one.
pub struct PollHandle {
    liveness: Liveness,
    ticker: JoinHandle<()>,
}

impl PollHandle {
    pub fn spawn<F>(period: Duration, liveness: Liveness, mut cycle: F) -> Self
    where
        F: FnMut() -> BoxFuture<'static, ()> + Send + 'static,
    {
        let alive = liveness.clone();
        let ticker = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                // first tick completes immediately
                interval.tick().await;
                if !alive.is_alive() {
                    break;
                }
                tokio::spawn(cycle());
            }
        });

        Self { liveness, ticker }
    }

    pub fn is_running(&self) -> bool {
        self.liveness.is_alive() && !self.ticker.is_finished()
    }

    /// Stops future ticks. Cycles already in flight keep running but see a dead
    /// liveness flag. Safe to call repeatedly.
    pub fn stop(&self) {
        self.liveness.kill();
        self.ticker.abort();
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
