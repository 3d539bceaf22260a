//! The store: single owner of counter state.
//!
//! A background actor task holds the state and the effect runtime. External
//! callers and running effects push onto the same queue, and the actor
//! reduces one action at a time in queue order.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{broadcast, mpsc, oneshot, watch};

use crate::config::Config;
use crate::counter::{CancelId, CounterAction, CounterReducer, CounterState};
use crate::effects::{ActionSink, EffectRuntime, EffectTicket, Environment};
use crate::facts::LookupError;
use crate::mvi::Reducer;

const ACTION_LOG_CAPACITY: usize = 256;

/// Errors returned by [`Store`] operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store actor has stopped; nothing will process the request.
    #[error("Store is closed")]
    Closed,
}

enum Command {
    Dispatch {
        action: CounterAction,
        /// Set when the action comes from a running effect.
        origin: Option<EffectTicket>,
        ack: Option<oneshot::Sender<CounterState>>,
    },
    RunningEffects {
        respond_to: oneshot::Sender<Vec<CancelId>>,
    },
    Shutdown {
        respond_to: oneshot::Sender<()>,
    },
}

/// Handle to a running store.
///
/// Cheap to clone. The actor stops when every handle is dropped or
/// [`Store::shutdown`] is called; its running effects are aborted then.
#[derive(Clone)]
pub struct Store {
    commands: mpsc::UnboundedSender<Command>,
    state: watch::Receiver<CounterState>,
    actions: broadcast::Sender<CounterAction>,
}

impl Store {
    /// Spawn a store with default state on the current tokio runtime.
    pub fn new(env: Environment, timer_interval: Duration) -> Self {
        let (commands, receiver) = mpsc::unbounded_channel();
        let (state_tx, state) = watch::channel(CounterState::default());
        let (actions, _) = broadcast::channel(ACTION_LOG_CAPACITY);

        let sink = QueueSink {
            commands: commands.downgrade(),
        };
        let actor = StoreActor {
            state: CounterState::default(),
            runtime: EffectRuntime::new(env, sink, timer_interval),
            receiver,
            state_tx,
            actions: actions.clone(),
        };
        tokio::spawn(actor.run());

        Self {
            commands,
            state,
            actions,
        }
    }

    /// Spawn a store wired to wall-clock time and the HTTP fact service.
    pub fn live(config: &Config) -> Result<Self, LookupError> {
        let env = Environment::live(&config.facts)?;
        Ok(Self::new(env, config.timer.interval()))
    }

    /// Enqueue an action without waiting for it to be processed.
    pub fn submit(&self, action: CounterAction) -> Result<(), StoreError> {
        self.commands
            .send(Command::Dispatch {
                action,
                origin: None,
                ack: None,
            })
            .map_err(|_| StoreError::Closed)
    }

    /// Enqueue an action and wait until it has been reduced.
    ///
    /// Returns the state committed by that action. Effects it requested
    /// have been started (or cancelled) by the time this returns.
    pub async fn send(&self, action: CounterAction) -> Result<CounterState, StoreError> {
        let (ack, done) = oneshot::channel();
        self.commands
            .send(Command::Dispatch {
                action,
                origin: None,
                ack: Some(ack),
            })
            .map_err(|_| StoreError::Closed)?;
        done.await.map_err(|_| StoreError::Closed)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> CounterState {
        self.state.borrow().clone()
    }

    /// Change notifications for the state.
    pub fn subscribe(&self) -> watch::Receiver<CounterState> {
        self.state.clone()
    }

    /// Every action reduced from now on, in processing order.
    ///
    /// Actions dropped because their effect was cancelled are not included.
    pub fn actions(&self) -> broadcast::Receiver<CounterAction> {
        self.actions.subscribe()
    }

    /// Cancellation ids whose effect task is still running.
    pub async fn running_effects(&self) -> Result<Vec<CancelId>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.commands
            .send(Command::RunningEffects { respond_to })
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)
    }

    /// Cancel all effects and stop the actor.
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.commands
            .send(Command::Shutdown { respond_to })
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)
    }
}

/// Feeds effect results into the store queue.
///
/// Holds a weak sender so running effects do not keep the store alive.
#[derive(Clone)]
struct QueueSink {
    commands: mpsc::WeakUnboundedSender<Command>,
}

impl ActionSink for QueueSink {
    fn feed(&self, action: CounterAction, ticket: EffectTicket) -> bool {
        let Some(commands) = self.commands.upgrade() else {
            return false;
        };
        commands
            .send(Command::Dispatch {
                action,
                origin: Some(ticket),
                ack: None,
            })
            .is_ok()
    }
}

struct StoreActor {
    state: CounterState,
    runtime: EffectRuntime<QueueSink>,
    receiver: mpsc::UnboundedReceiver<Command>,
    state_tx: watch::Sender<CounterState>,
    actions: broadcast::Sender<CounterAction>,
}

impl StoreActor {
    async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            match command {
                Command::Dispatch {
                    action,
                    origin,
                    ack,
                } => {
                    let snapshot = self.dispatch(action, origin);
                    if let Some(ack) = ack {
                        if ack.send(snapshot).is_err() {
                            tracing::trace!("Store: dispatch ack dropped (receiver gone)");
                        }
                    }
                }
                Command::RunningEffects { respond_to } => {
                    if respond_to.send(self.runtime.running()).is_err() {
                        tracing::trace!("Store: RunningEffects response dropped (receiver gone)");
                    }
                }
                Command::Shutdown { respond_to } => {
                    self.receiver.close();
                    self.runtime.cancel_all();
                    if respond_to.send(()).is_err() {
                        tracing::trace!("Store: Shutdown response dropped (receiver gone)");
                    }
                    break;
                }
            }
        }
        tracing::debug!(count = self.state.count, "Store stopped");
    }

    fn dispatch(&mut self, action: CounterAction, origin: Option<EffectTicket>) -> CounterState {
        if let Some(ticket) = origin {
            if !self.runtime.accept(ticket) {
                tracing::trace!(
                    ?action,
                    effect = %ticket.id,
                    generation = ticket.generation,
                    "Dropping action from cancelled effect"
                );
                return self.state.clone();
            }
        }

        let before = self.state.clone();
        let (after, effect) = CounterReducer::reduce(before.clone(), action.clone());
        log_changes(&action, &before, &after);

        self.state = after;
        self.state_tx.send_replace(self.state.clone());
        // Err only means nobody is subscribed
        let _ = self.actions.send(action);

        self.runtime.run(effect);
        self.state.clone()
    }
}

fn log_changes(action: &CounterAction, before: &CounterState, after: &CounterState) {
    if before == after {
        tracing::debug!(?action, "Action processed (no state change)");
    } else {
        tracing::debug!(?action, ?before, ?after, "State changed");
    }
}
