//! Runs effect descriptions as tokio tasks keyed by cancellation id.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::counter::{CancelId, CounterAction, CounterEffect};

use super::Environment;

/// Identifies one spawned effect instance.
///
/// Actions produced by an effect carry its ticket so the store can tell
/// whether the effect was cancelled or superseded in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectTicket {
    pub id: CancelId,
    pub generation: u64,
}

/// Where effects deliver their follow-up actions.
pub trait ActionSink: Clone + Send + Sync + 'static {
    /// Enqueue `action` on behalf of the effect holding `ticket`.
    ///
    /// Returns false once nobody is listening anymore.
    fn feed(&self, action: CounterAction, ticket: EffectTicket) -> bool;
}

struct Running {
    generation: u64,
    /// One-shot effects leave the registry once their result is accepted.
    one_shot: bool,
    handle: JoinHandle<()>,
}

/// Effect runtime owned by the store actor.
///
/// At most one task runs per [`CancelId`]; registering a new one aborts
/// and replaces the previous entry.
pub struct EffectRuntime<S> {
    env: Environment,
    sink: S,
    timer_interval: Duration,
    running: HashMap<CancelId, Running>,
    next_generation: u64,
}

impl<S: ActionSink> EffectRuntime<S> {
    pub fn new(env: Environment, sink: S, timer_interval: Duration) -> Self {
        Self {
            env,
            sink,
            timer_interval,
            running: HashMap::new(),
            next_generation: 0,
        }
    }

    /// Start, replace or cancel work as described by `effect`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn run(&mut self, effect: CounterEffect) {
        match effect {
            CounterEffect::None => {}
            CounterEffect::FetchFact { number } => self.start_fetch(number),
            CounterEffect::StartTimer { id } => self.start_timer(id),
            CounterEffect::Cancel { id } => {
                self.cancel(id);
            }
        }
    }

    /// Abort the task registered under `id`. Returns whether one existed.
    pub fn cancel(&mut self, id: CancelId) -> bool {
        match self.running.remove(&id) {
            Some(running) => {
                running.handle.abort();
                tracing::debug!(effect = %id, generation = running.generation, "Effect cancelled");
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (id, running) in self.running.drain() {
            running.handle.abort();
            tracing::trace!(effect = %id, "Effect aborted");
        }
    }

    /// Whether an action stamped with `ticket` may still be reduced.
    ///
    /// Stale tickets (cancelled or superseded effects) are rejected. A
    /// one-shot effect is retired from the registry when its result is
    /// accepted.
    pub fn accept(&mut self, ticket: EffectTicket) -> bool {
        let (current, one_shot) = match self.running.get(&ticket.id) {
            Some(running) => (running.generation == ticket.generation, running.one_shot),
            None => (false, false),
        };
        if current && one_shot {
            self.running.remove(&ticket.id);
        }
        current
    }

    /// Ids with a task that is still running, in stable order.
    pub fn running(&self) -> Vec<CancelId> {
        let mut ids: Vec<CancelId> = self
            .running
            .iter()
            .filter(|(_, running)| !running.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    fn start_fetch(&mut self, number: i64) {
        let facts = Arc::clone(&self.env.facts);
        let sink = self.sink.clone();
        self.register(CancelId::FactRequest, true, move |ticket| async move {
            let action = match facts.fetch(number).await {
                Ok(text) => CounterAction::FactReceived(text),
                Err(err) => {
                    tracing::warn!(number, kind = err.kind(), error = %err, "Fact lookup failed");
                    CounterAction::FactFailed(err.to_string())
                }
            };
            sink.feed(action, ticket);
        });
    }

    fn start_timer(&mut self, id: CancelId) {
        // Created here, not inside the task, so the first deadline is
        // measured from the transition that started the timer.
        let mut ticker = self.env.clock.ticker(self.timer_interval);
        let sink = self.sink.clone();
        self.register(id, false, move |ticket| async move {
            loop {
                ticker.tick().await;
                if !sink.feed(CounterAction::TimerTick, ticket) {
                    break;
                }
            }
        });
    }

    fn register<F, Fut>(&mut self, id: CancelId, one_shot: bool, make: F)
    where
        F: FnOnce(EffectTicket) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if self.cancel(id) {
            tracing::debug!(effect = %id, "Superseded running effect");
        }

        self.next_generation += 1;
        let ticket = EffectTicket {
            id,
            generation: self.next_generation,
        };
        let handle = tokio::spawn(make(ticket));
        tracing::debug!(effect = %id, generation = ticket.generation, "Effect started");

        self.running.insert(
            id,
            Running {
                generation: ticket.generation,
                one_shot,
                handle,
            },
        );
    }
}

impl<S> Drop for EffectRuntime<S> {
    fn drop(&mut self) {
        for running in self.running.values() {
            running.handle.abort();
        }
    }
}
