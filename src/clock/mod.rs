//! Clock capability.
//!
//! The effect runtime never reads time directly. It asks an injected
//! [`Clock`] for a [`Ticker`] and awaits its ticks, so tests can swap the
//! wall clock for a [`ManualClock`] that only moves when told to.

mod live;
mod manual;

use std::time::Duration;

use async_trait::async_trait;

pub use live::LiveClock;
pub use manual::ManualClock;

/// Smallest interval a ticker will honor. Zero would spin.
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Source of recurring tick signals.
pub trait Clock: Send + Sync + 'static {
    /// Create a ticker whose first tick fires one `interval` from now.
    ///
    /// The start instant is captured at call time, not at the first poll.
    fn ticker(&self, interval: Duration) -> Box<dyn Ticker>;
}

/// A recurring tick signal.
#[async_trait]
pub trait Ticker: Send {
    /// Wait for the next tick.
    async fn tick(&mut self);
}
