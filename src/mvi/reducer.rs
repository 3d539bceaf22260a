//! Reducer trait for MVI architecture.

use super::action::Action;
use super::state::FeatureState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> (State, Effect).
/// Side effects are only *described* by the returned effect value; running
/// them is the job of the effect runtime.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: FeatureState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Description of the asynchronous work requested by a transition.
    type Effect;

    /// Process an action and return the new state plus the effect to run.
    ///
    /// This must not perform I/O or read the clock.
    fn reduce(state: Self::State, action: Self::Action) -> (Self::State, Self::Effect);
}
