use crate::mvi::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Decrement,
    Increment,
    /// Ask the fact service about the current count.
    RequestFact,
    FactReceived(String),
    /// The fact lookup failed. Carries the error text for diagnostics only.
    FactFailed(String),
    ToggleTimer,
    TimerTick,
}

impl Action for CounterAction {}
