use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

use super::{Clock, Ticker, MIN_TICK_INTERVAL};

/// Virtual clock that only moves on [`ManualClock::advance`].
///
/// Tickers schedule their deadlines at `start + k * interval`, so a single
/// `advance` spanning several intervals releases exactly that many ticks.
/// Nothing here sleeps or looks at the wall clock.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<watch::Sender<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        let (now, _) = watch::channel(Duration::ZERO);
        Self { now: Arc::new(now) }
    }

    /// Virtual time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        *self.now.borrow()
    }

    /// Move virtual time forward, waking every ticker whose deadline passed.
    pub fn advance(&self, by: Duration) {
        self.now.send_modify(|now| *now += by);
        tracing::trace!(now = ?self.now(), "Manual clock advanced");
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn ticker(&self, interval: Duration) -> Box<dyn Ticker> {
        let interval = interval.max(MIN_TICK_INTERVAL);
        let receiver = self.now.subscribe();
        let next = *receiver.borrow() + interval;
        Box::new(ManualTicker {
            receiver,
            next,
            interval,
        })
    }
}

struct ManualTicker {
    receiver: watch::Receiver<Duration>,
    next: Duration,
    interval: Duration,
}

#[async_trait]
impl Ticker for ManualTicker {
    async fn tick(&mut self) {
        loop {
            let now = *self.receiver.borrow_and_update();
            if now >= self.next {
                self.next += self.interval;
                return;
            }
            if self.receiver.changed().await.is_err() {
                // Clock dropped: time can no longer move
                std::future::pending::<()>().await;
            }
        }
    }
}
