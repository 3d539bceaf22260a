use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use super::{Clock, Ticker, MIN_TICK_INTERVAL};

/// Wall-clock time backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveClock;

impl Clock for LiveClock {
    fn ticker(&self, interval: Duration) -> Box<dyn Ticker> {
        let period = interval.max(MIN_TICK_INTERVAL);
        let mut inner = interval_at(Instant::now() + period, period);
        // A stalled consumer gets one late tick, not a burst
        inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Box::new(LiveTicker { inner })
    }
}

struct LiveTicker {
    inner: Interval,
}

#[async_trait]
impl Ticker for LiveTicker {
    async fn tick(&mut self) {
        self.inner.tick().await;
    }
}
